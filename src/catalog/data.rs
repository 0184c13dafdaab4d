// Built-in FAQ dataset for the National Art School kiosk display.

use super::types::{Accent, CardSize, Catalog, FaqRecord};

fn record(
    id: u32,
    question: &str,
    answer: &str,
    size: CardSize,
    category: &str,
    icon: &str,
    accent: Accent,
) -> FaqRecord {
    FaqRecord {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
        size,
        category: category.to_string(),
        icon: icon.to_string(),
        accent,
    }
}

/// The compiled-in catalog. Content matches the kiosk deployment; a
/// different deployment can supply its own TOML via `[catalog] path`.
pub fn builtin_catalog() -> Catalog {
    use Accent::*;
    use CardSize::*;

    Catalog {
        records: vec![
            record(
                1,
                "Can I use FEE-HELP to pay for my degree?",
                "FEE-HELP is available, please visit nas.edu.au for more information. \
                 Eligibility for FEE-HELP requires Australian citizenship, or holding a \
                 New Zealand Special Category Visa (SCV) or a permanent humanitarian visa \
                 and meeting residency requirements. To remain eligible, you must pass at \
                 least 50% of your units. A 20% fee applies to the FEE-HELP loan for \
                 Undergraduate Study. Note: Postgraduate study is exempt from the loan fee.",
                Large,
                "Finance",
                "💰",
                Blue,
            ),
            record(
                2,
                "Where is NAS located?",
                "NAS is conveniently located next to Taylor Square in the heart of \
                 Darlinghurst. It is easily accessible by public transport, with bus \
                 routes a 2-minute walk away on Oxford St and Burton St and train \
                 stations a 10-minute walk away (Kings Cross and Museum stations).",
                Medium,
                "Location",
                "📍",
                Emerald,
            ),
            record(
                3,
                "Does NAS have accommodation?",
                "NAS does not offer accommodation. Students can approach providers such \
                 as Iglu, Scape, Unilodge, or some of the residential colleges of UNSW \
                 or USYD.",
                Medium,
                "Student Life",
                "🏠",
                Amber,
            ),
            record(
                4,
                "Can I study part-time?",
                "NAS only offers places in the BFA and MFA for full-time study.",
                Small,
                "Admission",
                "⏱️",
                Rose,
            ),
            record(
                5,
                "Can I study remotely?",
                "No. NAS degrees are studio based and are delivered face-to-face.",
                Small,
                "Admission",
                "🌐",
                Violet,
            ),
            record(
                6,
                "How will the Bachelor of Fine Arts prepare me for my professional career?",
                "Professional Studies seminars are offered during the BFA in direct \
                 preparation for life in the field following graduation. These develop \
                 knowledge and awareness of issues across the contemporary professional \
                 art industry.",
                Medium,
                "Curriculum",
                "🎨",
                Sky,
            ),
            record(
                7,
                "Does NAS consider my ATAR score?",
                "No, your ATAR score is not considered, but you must complete year 12. \
                 NAS acceptance is based on the presentation of a portfolio, an \
                 interview, and a written statement.",
                Medium,
                "Admission",
                "📊",
                Fuchsia,
            ),
            record(
                8,
                "How do I apply?",
                "1. Check your eligibility on our website. 2. Apply online at UAC - UAC \
                 application fee applies. 3. Upload your proof of high school completion \
                 or prior tertiary studies. 4. Upload your ID and Submit your \
                 application. 5. Prepare your portfolio and await an invitation for \
                 interview and portfolio assessment from NAS.",
                Large,
                "Application",
                "📝",
                Teal,
            ),
            record(
                9,
                "Does NAS have an Early Entry round?",
                "NAS participates in the School Recommendation Scheme (SRS). If you're \
                 finishing Year 12, talk to your teacher about the SRS. HSC students \
                 successful in this round will receive an offer prior to receiving their \
                 HSC Results. We also have an early round accessible to all: September \
                 Round 2.",
                Medium,
                "Application",
                "🔄",
                Yellow,
            ),
            record(
                10,
                "Can I defer my offer?",
                "NAS does not offer deferral. We encourage you to apply to NAS for the \
                 year you want to commence your tertiary studies.",
                Small,
                "Admission",
                "⏳",
                Slate,
            ),
            record(
                11,
                "How much does it cost to study at NAS?",
                "In 2025 the fees for the Bachelor of Fine Art (BFA) and the Master of \
                 Fine Art (MFA) are $16,246 per year (full time) for domestic students \
                 and $42,891 per year (full time) for international students. To study a \
                 Doctor of Fine Art (DFA) in 2025 it will cost $16,246 per year (full \
                 time)/ $ 8,123 per year (part-time) for domestic students and $42,891 \
                 per year (full time) for international students. Please note: Fees are \
                 subject to change each academic year so may vary in 2026.",
                Large,
                "Finance",
                "💲",
                Red,
            ),
            record(
                12,
                "Does NAS offer scholarships?",
                "We have generous scholarship available for commencing BFA and MFA \
                 students. Unfortunately, we do not have any scholarships available for \
                 DFA or International students. You can find out more info on our \
                 website nas.edu.au",
                Medium,
                "Finance",
                "🏆",
                Indigo,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn builtin_ids_are_one_through_twelve() {
        let catalog = builtin_catalog();
        let ids: Vec<u32> = catalog.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn application_procedure_is_numbered() {
        let catalog = builtin_catalog();
        let apply = catalog.find(8).unwrap();
        assert!(apply.answer.contains("1."));
    }
}
