use serde::Serialize;

/// One award category. The symbolic `key` joins the catalog to the character
/// illustration set.
#[derive(Debug, Clone, Serialize)]
pub struct AwardCatalogEntry {
    pub display_label: &'static str,
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSection {
    pub heading: &'static str,
    pub entries: &'static [AwardCatalogEntry],
}

static STAFF_ENTRIES: [AwardCatalogEntry; 7] = [
    AwardCatalogEntry {
        display_label: "Krishna Sarthi (Best Mentor)",
        key: "KRISHNA",
        title: "THE KRISHNA SARTHI AWARD",
        description: "Like Lord Krishna guided Arjuna to victory, you have been the guiding light for our students. This award honors your exceptional mentorship and direction.",
    },
    AwardCatalogEntry {
        display_label: "Vashishtha Guru (Subject Expert)",
        key: "VASHISHTHA",
        title: "THE VASHISHTHA GURU AWARD",
        description: "Just as Guru Vashishtha molded Lord Ram, your deep knowledge and teaching skills have shaped the future of our students. We honor your wisdom as a Subject Expert.",
    },
    AwardCatalogEntry {
        display_label: "Hanuman Sanjeevani (Motivator)",
        key: "HANUMAN",
        title: "THE HANUMAN SANJEEVANI AWARD",
        description: "Whenever a challenge arose, you brought the 'Sanjeevani' of hope and solutions. This award celebrates your 'Can Do' attitude and selfless motivation.",
    },
    AwardCatalogEntry {
        display_label: "Vishwakarma Nirman (Management)",
        key: "VISHWAKARMA",
        title: "THE VISHWAKARMA NIRMAN AWARD",
        description: "The architect of our success! For your outstanding contribution in Management, Planning, and creating the best materials for the Academy.",
    },
    AwardCatalogEntry {
        display_label: "Bhishma Stambh (Loyal Staff)",
        key: "BHISHMA",
        title: "THE BHISHMA STAMBH AWARD",
        description: "Standing tall like Bhishma Pitamah, you are the pillar of Murlidhar Academy. This award honors your unwavering Loyalty and years of dedication.",
    },
    AwardCatalogEntry {
        display_label: "Saraswati Vagdhara (Best Anchor)",
        key: "SARASWATI",
        title: "THE SARASWATI VAGDHARA AWARD",
        description: "Blessed by Goddess Saraswati, your speech and anchoring mesmerized everyone. This award honors your eloquence and command over the stage.",
    },
    AwardCatalogEntry {
        display_label: "Kevat Sahyog (Best Supporter)",
        key: "KEVAT",
        title: "THE KEVAT SAHYOG AWARD",
        description: "Like Kevat helped Lord Ram cross the river, your selfless support has helped this Academy move forward. We are grateful for your service.",
    },
];

static EXPERT_ENTRIES: [AwardCatalogEntry; 8] = [
    AwardCatalogEntry {
        display_label: "Ved Vyas (History Expert)",
        key: "VED_VYAS",
        title: "THE VED VYAS ITIHAS AWARD",
        description: "Like Maharshi Ved Vyas penned the vast history of Mahabharata, your knowledge of History is profound. Honoring the Best History Teacher.",
    },
    AwardCatalogEntry {
        display_label: "Varahamihira (Geography Expert)",
        key: "VARAHAMIHIRA",
        title: "THE VARAHAMIHIRA BHUGOL AWARD",
        description: "Varahamihira unlocked the secrets of Earth and Space. Your mastery over Geography is equally deep. Honoring the Best Geography Teacher.",
    },
    AwardCatalogEntry {
        display_label: "Hemchandracharya (Literature Expert)",
        key: "HEMCHANDRACHARYA",
        title: "THE HEMCHANDRACHARYA SAHITYA AWARD",
        description: "Like the 'Kalikalsarvajna' Hemchandracharya immortalized language, your command over Literature and Grammar is exemplary.",
    },
    AwardCatalogEntry {
        display_label: "Vivekananda (Current Affairs/Global)",
        key: "VIVEKANANDA",
        title: "THE VIVEKANANDA GLOBAL AWARD",
        description: "Swami Vivekananda enlightened the world with wisdom. Your knowledge of Current Affairs and General Knowledge is equally brilliant.",
    },
    AwardCatalogEntry {
        display_label: "Aryabhata (Maths Expert)",
        key: "ARYABHATA",
        title: "THE ARYABHATA GANIT AWARD",
        description: "Aryabhata gave the world the Zero and new mathematics. Your logic and problem-solving skills in Maths are truly unique.",
    },
    AwardCatalogEntry {
        display_label: "Gautama Tark (Reasoning Expert)",
        key: "GAUTAMA",
        title: "THE GAUTAMA TARK AWARD",
        description: "Maharshi Gautama founded the Nyaya Sutras (Logic). Your Reasoning skills and sharp intellect are commendable. Honoring the Reasoning Expert.",
    },
    AwardCatalogEntry {
        display_label: "Kanada Vignan (Science Expert)",
        key: "KANADA",
        title: "THE KANADA VIGNAN AWARD",
        description: "Like Maharshi Kanada, the pioneer of atomic theory, your scientific temper and understanding of Science are outstanding.",
    },
    AwardCatalogEntry {
        display_label: "Vidur Niti (Law/Constitution)",
        key: "VIDUR",
        title: "THE VIDUR NITI AWARD",
        description: "Mahatma Vidur was known for his ethics and policy. Your understanding of Law, Constitution, and Ethics is highly respected.",
    },
];

pub static SECTIONS: [CatalogSection; 2] = [
    CatalogSection {
        heading: "Staff & Roles",
        entries: &STAFF_ENTRIES,
    },
    CatalogSection {
        heading: "Subject Experts",
        entries: &EXPERT_ENTRIES,
    },
];

/// Remote file identifier for each character illustration.
pub static CHARACTER_IDS: [(&str, &str); 15] = [
    ("KRISHNA", "17M893cNMFHJMTAdI7q63Rco-IPfbPzDV"),
    ("VASHISHTHA", "1zGIr0w-bDKniX_YixYLbWRTvjgQMngFc"),
    ("HANUMAN", "1mjModpBJPt6z5_oOWSAFNAbHVKfh92OO"),
    ("VISHWAKARMA", "1qeVY4aCjgrNgw-3JoEDbOkYsCKJUlk5N"),
    ("BHISHMA", "19tjccM9X2TGseoqwdLx8r_v0r124RLl_"),
    ("SARASWATI", "1yP0MDaBa1nyBnqSbOiYF9YfbY3NZjOfU"),
    ("KEVAT", "1TACSn2dkT2CvsEeDzjklrOJ-WxLufcKa"),
    ("VED_VYAS", "1CZu-SqL5_HsjMDXT9RI791koQua7WBCB"),
    ("VARAHAMIHIRA", "1K9_yjGTTFt_bEvm2UE3lNBiy5kKLjF6M"),
    ("HEMCHANDRACHARYA", "18rAhMPr8YEOiC8IE5NkOnuQaDMtlMg4W"),
    ("VIVEKANANDA", "1NmPraE54Y2uX3DSUC4UGijqU9PxbjEVH"),
    ("ARYABHATA", "1oK6X51bZuTJZTbx7IGjqkQ54SB835fSM"),
    ("GAUTAMA", "1kj-_eSd2ZXDjxY5xY60od5n8yPraWvg2"),
    ("KANADA", "1hWsU_f7kUUacD0xBuYwhu8da2qU00FhI"),
    ("VIDUR", "1WVpPjHz8Ic9-WXfoXTAzg8L1eML81SUG"),
];

/// Pure table lookup. Section headings and unknown labels resolve to `None`,
/// which callers treat as "nothing selected".
pub fn lookup(display_label: &str) -> Option<&'static AwardCatalogEntry> {
    SECTIONS
        .iter()
        .flat_map(|s| s.entries.iter())
        .find(|e| e.display_label == display_label)
}

pub fn character_file_id(key: &str) -> Option<&'static str> {
    CHARACTER_IDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_known_labels() {
        let entry = lookup("Krishna Sarthi (Best Mentor)").unwrap();
        assert_eq!(entry.key, "KRISHNA");
        assert_eq!(entry.title, "THE KRISHNA SARTHI AWARD");
    }

    #[test]
    fn lookup_rejects_headings_and_unknown_labels() {
        assert!(lookup("--- STAFF & ROLES ---").is_none());
        assert!(lookup("Staff & Roles").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("Best Dancer").is_none());
    }

    #[test]
    fn every_entry_has_a_character_illustration() {
        for section in &SECTIONS {
            for entry in section.entries {
                assert!(
                    character_file_id(entry.key).is_some(),
                    "no illustration id for {}",
                    entry.key
                );
            }
        }
    }

    #[test]
    fn catalog_keys_are_unique() {
        let mut keys: Vec<_> = SECTIONS
            .iter()
            .flat_map(|s| s.entries.iter().map(|e| e.key))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 15);
    }
}
