//! Country code to App Store storefront id table.

const MARKETS: &[(&str, u32)] = &[
    ("AE", 143481),
    ("AI", 143538),
    ("AM", 143524),
    ("AO", 143564),
    ("AR", 143505),
    ("AT", 143445),
    ("AU", 143460),
    ("AZ", 143568),
    ("BB", 143541),
    ("BE", 143446),
    ("BG", 143526),
    ("BH", 143559),
    ("BM", 143542),
    ("BN", 143560),
    ("BO", 143556),
    ("BR", 143503),
    ("BW", 143525),
    ("BY", 143565),
    ("BZ", 143555),
    ("CA", 143455),
    ("CH", 143459),
    ("CL", 143483),
    ("CN", 143465),
    ("CO", 143501),
    ("CR", 143495),
    ("CY", 143557),
    ("CZ", 143489),
    ("DE", 143443),
    ("DK", 143458),
    ("DM", 143545),
    ("DZ", 143563),
    ("EC", 143509),
    ("EE", 143518),
    ("EG", 143516),
    ("ES", 143454),
    ("FI", 143447),
    ("FR", 143442),
    ("GB", 143444),
    ("GD", 143546),
    ("GH", 143573),
    ("GR", 143448),
    ("GT", 143504),
    ("GY", 143553),
    ("HK", 143463),
    ("HN", 143510),
    ("HR", 143494),
    ("HU", 143482),
    ("ID", 143476),
    ("IE", 143449),
    ("IL", 143491),
    ("IN", 143467),
    ("IS", 143558),
    ("IT", 143450),
    ("JM", 143511),
    ("JO", 143528),
    ("JP", 143462),
    ("KE", 143529),
    ("KR", 143466),
    ("KW", 143493),
    ("KY", 143544),
    ("LB", 143497),
    ("LK", 143486),
    ("LT", 143520),
    ("LU", 143451),
    ("LV", 143519),
    ("MG", 143531),
    ("MK", 143530),
    ("ML", 143532),
    ("MO", 143515),
    ("MS", 143547),
    ("MT", 143521),
    ("MU", 143533),
    ("MX", 143468),
    ("MY", 143473),
    ("NE", 143534),
    ("NG", 143561),
    ("NI", 143512),
    ("NL", 143452),
    ("NO", 143457),
    ("NP", 143484),
    ("NZ", 143461),
    ("OM", 143562),
    ("PA", 143485),
    ("PE", 143507),
    ("PH", 143474),
    ("PK", 143477),
    ("PL", 143478),
    ("PT", 143453),
    ("PY", 143513),
    ("QA", 143498),
    ("RO", 143487),
    ("RU", 143469),
    ("SA", 143479),
    ("SE", 143456),
    ("SG", 143464),
    ("SI", 143499),
    ("SK", 143496),
    ("SN", 143535),
    ("SR", 143554),
    ("SV", 143506),
    ("TH", 143475),
    ("TN", 143536),
    ("TR", 143480),
    ("TW", 143470),
    ("TZ", 143572),
    ("UA", 143492),
    ("UG", 143537),
    ("US", 143441),
    ("UY", 143514),
    ("UZ", 143566),
    ("VE", 143502),
    ("VG", 143543),
    ("VN", 143471),
    ("YE", 143571),
    ("ZA", 143472),
];

/// Storefront id for a two-letter country code, case-insensitive.
pub fn storefront(country: &str) -> Option<u32> {
    let country = country.trim();
    MARKETS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(country))
        .map(|(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_markets_in_any_case() {
        assert_eq!(storefront("us"), Some(143441));
        assert_eq!(storefront("US"), Some(143441));
        assert_eq!(storefront(" gb "), Some(143444));
        assert_eq!(storefront("jp"), Some(143462));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(storefront("xx"), None);
        assert_eq!(storefront(""), None);
        assert_eq!(storefront("usa"), None);
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut codes: Vec<_> = MARKETS.iter().map(|(code, _)| *code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), MARKETS.len());
    }
}
