//! ISO 3166-1 country directory seeded into the `countries` table.
//!
//! Regions follow the UN geoscheme top level. Antarctica has none and is
//! stored with a NULL region.

/// `(name, alpha2, alpha3, region)`; an empty region means none.
pub(crate) const COUNTRIES: &[(&str, &str, &str, &str)] = &[
    // Africa
    ("Algeria", "DZ", "DZA", "Africa"),
    ("Angola", "AO", "AGO", "Africa"),
    ("Benin", "BJ", "BEN", "Africa"),
    ("Botswana", "BW", "BWA", "Africa"),
    ("British Indian Ocean Territory", "IO", "IOT", "Africa"),
    ("Burkina Faso", "BF", "BFA", "Africa"),
    ("Burundi", "BI", "BDI", "Africa"),
    ("Cabo Verde", "CV", "CPV", "Africa"),
    ("Cameroon", "CM", "CMR", "Africa"),
    ("Central African Republic", "CF", "CAF", "Africa"),
    ("Chad", "TD", "TCD", "Africa"),
    ("Comoros", "KM", "COM", "Africa"),
    ("Congo", "CG", "COG", "Africa"),
    ("Congo, Democratic Republic of the", "CD", "COD", "Africa"),
    ("Côte d'Ivoire", "CI", "CIV", "Africa"),
    ("Djibouti", "DJ", "DJI", "Africa"),
    ("Egypt", "EG", "EGY", "Africa"),
    ("Equatorial Guinea", "GQ", "GNQ", "Africa"),
    ("Eritrea", "ER", "ERI", "Africa"),
    ("Eswatini", "SZ", "SWZ", "Africa"),
    ("Ethiopia", "ET", "ETH", "Africa"),
    ("French Southern Territories", "TF", "ATF", "Africa"),
    ("Gabon", "GA", "GAB", "Africa"),
    ("Gambia", "GM", "GMB", "Africa"),
    ("Ghana", "GH", "GHA", "Africa"),
    ("Guinea", "GN", "GIN", "Africa"),
    ("Guinea-Bissau", "GW", "GNB", "Africa"),
    ("Kenya", "KE", "KEN", "Africa"),
    ("Lesotho", "LS", "LSO", "Africa"),
    ("Liberia", "LR", "LBR", "Africa"),
    ("Libya", "LY", "LBY", "Africa"),
    ("Madagascar", "MG", "MDG", "Africa"),
    ("Malawi", "MW", "MWI", "Africa"),
    ("Mali", "ML", "MLI", "Africa"),
    ("Mauritania", "MR", "MRT", "Africa"),
    ("Mauritius", "MU", "MUS", "Africa"),
    ("Mayotte", "YT", "MYT", "Africa"),
    ("Morocco", "MA", "MAR", "Africa"),
    ("Mozambique", "MZ", "MOZ", "Africa"),
    ("Namibia", "NA", "NAM", "Africa"),
    ("Niger", "NE", "NER", "Africa"),
    ("Nigeria", "NG", "NGA", "Africa"),
    ("Réunion", "RE", "REU", "Africa"),
    ("Rwanda", "RW", "RWA", "Africa"),
    ("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN", "Africa"),
    ("Sao Tome and Principe", "ST", "STP", "Africa"),
    ("Senegal", "SN", "SEN", "Africa"),
    ("Seychelles", "SC", "SYC", "Africa"),
    ("Sierra Leone", "SL", "SLE", "Africa"),
    ("Somalia", "SO", "SOM", "Africa"),
    ("South Africa", "ZA", "ZAF", "Africa"),
    ("South Sudan", "SS", "SSD", "Africa"),
    ("Sudan", "SD", "SDN", "Africa"),
    ("Tanzania, United Republic of", "TZ", "TZA", "Africa"),
    ("Togo", "TG", "TGO", "Africa"),
    ("Tunisia", "TN", "TUN", "Africa"),
    ("Uganda", "UG", "UGA", "Africa"),
    ("Western Sahara", "EH", "ESH", "Africa"),
    ("Zambia", "ZM", "ZMB", "Africa"),
    ("Zimbabwe", "ZW", "ZWE", "Africa"),
    // Americas
    ("Anguilla", "AI", "AIA", "Americas"),
    ("Antigua and Barbuda", "AG", "ATG", "Americas"),
    ("Argentina", "AR", "ARG", "Americas"),
    ("Aruba", "AW", "ABW", "Americas"),
    ("Bahamas", "BS", "BHS", "Americas"),
    ("Barbados", "BB", "BRB", "Americas"),
    ("Belize", "BZ", "BLZ", "Americas"),
    ("Bermuda", "BM", "BMU", "Americas"),
    ("Bolivia, Plurinational State of", "BO", "BOL", "Americas"),
    ("Bonaire, Sint Eustatius and Saba", "BQ", "BES", "Americas"),
    ("Bouvet Island", "BV", "BVT", "Americas"),
    ("Brazil", "BR", "BRA", "Americas"),
    ("Canada", "CA", "CAN", "Americas"),
    ("Cayman Islands", "KY", "CYM", "Americas"),
    ("Chile", "CL", "CHL", "Americas"),
    ("Colombia", "CO", "COL", "Americas"),
    ("Costa Rica", "CR", "CRI", "Americas"),
    ("Cuba", "CU", "CUB", "Americas"),
    ("Curaçao", "CW", "CUW", "Americas"),
    ("Dominica", "DM", "DMA", "Americas"),
    ("Dominican Republic", "DO", "DOM", "Americas"),
    ("Ecuador", "EC", "ECU", "Americas"),
    ("El Salvador", "SV", "SLV", "Americas"),
    ("Falkland Islands (Malvinas)", "FK", "FLK", "Americas"),
    ("French Guiana", "GF", "GUF", "Americas"),
    ("Greenland", "GL", "GRL", "Americas"),
    ("Grenada", "GD", "GRD", "Americas"),
    ("Guadeloupe", "GP", "GLP", "Americas"),
    ("Guatemala", "GT", "GTM", "Americas"),
    ("Guyana", "GY", "GUY", "Americas"),
    ("Haiti", "HT", "HTI", "Americas"),
    ("Honduras", "HN", "HND", "Americas"),
    ("Jamaica", "JM", "JAM", "Americas"),
    ("Martinique", "MQ", "MTQ", "Americas"),
    ("Mexico", "MX", "MEX", "Americas"),
    ("Montserrat", "MS", "MSR", "Americas"),
    ("Nicaragua", "NI", "NIC", "Americas"),
    ("Panama", "PA", "PAN", "Americas"),
    ("Paraguay", "PY", "PRY", "Americas"),
    ("Peru", "PE", "PER", "Americas"),
    ("Puerto Rico", "PR", "PRI", "Americas"),
    ("Saint Barthélemy", "BL", "BLM", "Americas"),
    ("Saint Kitts and Nevis", "KN", "KNA", "Americas"),
    ("Saint Lucia", "LC", "LCA", "Americas"),
    ("Saint Martin (French part)", "MF", "MAF", "Americas"),
    ("Saint Pierre and Miquelon", "PM", "SPM", "Americas"),
    ("Saint Vincent and the Grenadines", "VC", "VCT", "Americas"),
    ("Sint Maarten (Dutch part)", "SX", "SXM", "Americas"),
    ("South Georgia and the South Sandwich Islands", "GS", "SGS", "Americas"),
    ("Suriname", "SR", "SUR", "Americas"),
    ("Trinidad and Tobago", "TT", "TTO", "Americas"),
    ("Turks and Caicos Islands", "TC", "TCA", "Americas"),
    ("United States", "US", "USA", "Americas"),
    ("Uruguay", "UY", "URY", "Americas"),
    ("Venezuela, Bolivarian Republic of", "VE", "VEN", "Americas"),
    ("Virgin Islands (British)", "VG", "VGB", "Americas"),
    ("Virgin Islands (U.S.)", "VI", "VIR", "Americas"),
    // Asia
    ("Afghanistan", "AF", "AFG", "Asia"),
    ("Armenia", "AM", "ARM", "Asia"),
    ("Azerbaijan", "AZ", "AZE", "Asia"),
    ("Bahrain", "BH", "BHR", "Asia"),
    ("Bangladesh", "BD", "BGD", "Asia"),
    ("Bhutan", "BT", "BTN", "Asia"),
    ("Brunei Darussalam", "BN", "BRN", "Asia"),
    ("Cambodia", "KH", "KHM", "Asia"),
    ("China", "CN", "CHN", "Asia"),
    ("Cyprus", "CY", "CYP", "Asia"),
    ("Georgia", "GE", "GEO", "Asia"),
    ("Hong Kong", "HK", "HKG", "Asia"),
    ("India", "IN", "IND", "Asia"),
    ("Indonesia", "ID", "IDN", "Asia"),
    ("Iran, Islamic Republic of", "IR", "IRN", "Asia"),
    ("Iraq", "IQ", "IRQ", "Asia"),
    ("Israel", "IL", "ISR", "Asia"),
    ("Japan", "JP", "JPN", "Asia"),
    ("Jordan", "JO", "JOR", "Asia"),
    ("Kazakhstan", "KZ", "KAZ", "Asia"),
    ("Korea, Democratic People's Republic of", "KP", "PRK", "Asia"),
    ("Korea, Republic of", "KR", "KOR", "Asia"),
    ("Kuwait", "KW", "KWT", "Asia"),
    ("Kyrgyzstan", "KG", "KGZ", "Asia"),
    ("Lao People's Democratic Republic", "LA", "LAO", "Asia"),
    ("Lebanon", "LB", "LBN", "Asia"),
    ("Macao", "MO", "MAC", "Asia"),
    ("Malaysia", "MY", "MYS", "Asia"),
    ("Maldives", "MV", "MDV", "Asia"),
    ("Mongolia", "MN", "MNG", "Asia"),
    ("Myanmar", "MM", "MMR", "Asia"),
    ("Nepal", "NP", "NPL", "Asia"),
    ("Oman", "OM", "OMN", "Asia"),
    ("Pakistan", "PK", "PAK", "Asia"),
    ("Palestine, State of", "PS", "PSE", "Asia"),
    ("Philippines", "PH", "PHL", "Asia"),
    ("Qatar", "QA", "QAT", "Asia"),
    ("Saudi Arabia", "SA", "SAU", "Asia"),
    ("Singapore", "SG", "SGP", "Asia"),
    ("Sri Lanka", "LK", "LKA", "Asia"),
    ("Syrian Arab Republic", "SY", "SYR", "Asia"),
    ("Taiwan, Province of China", "TW", "TWN", "Asia"),
    ("Tajikistan", "TJ", "TJK", "Asia"),
    ("Thailand", "TH", "THA", "Asia"),
    ("Timor-Leste", "TL", "TLS", "Asia"),
    ("Türkiye", "TR", "TUR", "Asia"),
    ("Turkmenistan", "TM", "TKM", "Asia"),
    ("United Arab Emirates", "AE", "ARE", "Asia"),
    ("Uzbekistan", "UZ", "UZB", "Asia"),
    ("Viet Nam", "VN", "VNM", "Asia"),
    ("Yemen", "YE", "YEM", "Asia"),
    // Europe
    ("Åland Islands", "AX", "ALA", "Europe"),
    ("Albania", "AL", "ALB", "Europe"),
    ("Andorra", "AD", "AND", "Europe"),
    ("Austria", "AT", "AUT", "Europe"),
    ("Belarus", "BY", "BLR", "Europe"),
    ("Belgium", "BE", "BEL", "Europe"),
    ("Bosnia and Herzegovina", "BA", "BIH", "Europe"),
    ("Bulgaria", "BG", "BGR", "Europe"),
    ("Croatia", "HR", "HRV", "Europe"),
    ("Czechia", "CZ", "CZE", "Europe"),
    ("Denmark", "DK", "DNK", "Europe"),
    ("Estonia", "EE", "EST", "Europe"),
    ("Faroe Islands", "FO", "FRO", "Europe"),
    ("Finland", "FI", "FIN", "Europe"),
    ("France", "FR", "FRA", "Europe"),
    ("Germany", "DE", "DEU", "Europe"),
    ("Gibraltar", "GI", "GIB", "Europe"),
    ("Greece", "GR", "GRC", "Europe"),
    ("Guernsey", "GG", "GGY", "Europe"),
    ("Holy See", "VA", "VAT", "Europe"),
    ("Hungary", "HU", "HUN", "Europe"),
    ("Iceland", "IS", "ISL", "Europe"),
    ("Ireland", "IE", "IRL", "Europe"),
    ("Isle of Man", "IM", "IMN", "Europe"),
    ("Italy", "IT", "ITA", "Europe"),
    ("Jersey", "JE", "JEY", "Europe"),
    ("Latvia", "LV", "LVA", "Europe"),
    ("Liechtenstein", "LI", "LIE", "Europe"),
    ("Lithuania", "LT", "LTU", "Europe"),
    ("Luxembourg", "LU", "LUX", "Europe"),
    ("Malta", "MT", "MLT", "Europe"),
    ("Moldova, Republic of", "MD", "MDA", "Europe"),
    ("Monaco", "MC", "MCO", "Europe"),
    ("Montenegro", "ME", "MNE", "Europe"),
    ("Netherlands", "NL", "NLD", "Europe"),
    ("North Macedonia", "MK", "MKD", "Europe"),
    ("Norway", "NO", "NOR", "Europe"),
    ("Poland", "PL", "POL", "Europe"),
    ("Portugal", "PT", "PRT", "Europe"),
    ("Romania", "RO", "ROU", "Europe"),
    ("Russian Federation", "RU", "RUS", "Europe"),
    ("San Marino", "SM", "SMR", "Europe"),
    ("Serbia", "RS", "SRB", "Europe"),
    ("Slovakia", "SK", "SVK", "Europe"),
    ("Slovenia", "SI", "SVN", "Europe"),
    ("Spain", "ES", "ESP", "Europe"),
    ("Svalbard and Jan Mayen", "SJ", "SJM", "Europe"),
    ("Sweden", "SE", "SWE", "Europe"),
    ("Switzerland", "CH", "CHE", "Europe"),
    ("Ukraine", "UA", "UKR", "Europe"),
    ("United Kingdom", "GB", "GBR", "Europe"),
    // Oceania
    ("American Samoa", "AS", "ASM", "Oceania"),
    ("Australia", "AU", "AUS", "Oceania"),
    ("Christmas Island", "CX", "CXR", "Oceania"),
    ("Cocos (Keeling) Islands", "CC", "CCK", "Oceania"),
    ("Cook Islands", "CK", "COK", "Oceania"),
    ("Fiji", "FJ", "FJI", "Oceania"),
    ("French Polynesia", "PF", "PYF", "Oceania"),
    ("Guam", "GU", "GUM", "Oceania"),
    ("Heard Island and McDonald Islands", "HM", "HMD", "Oceania"),
    ("Kiribati", "KI", "KIR", "Oceania"),
    ("Marshall Islands", "MH", "MHL", "Oceania"),
    ("Micronesia, Federated States of", "FM", "FSM", "Oceania"),
    ("Nauru", "NR", "NRU", "Oceania"),
    ("New Caledonia", "NC", "NCL", "Oceania"),
    ("New Zealand", "NZ", "NZL", "Oceania"),
    ("Niue", "NU", "NIU", "Oceania"),
    ("Norfolk Island", "NF", "NFK", "Oceania"),
    ("Northern Mariana Islands", "MP", "MNP", "Oceania"),
    ("Palau", "PW", "PLW", "Oceania"),
    ("Papua New Guinea", "PG", "PNG", "Oceania"),
    ("Pitcairn", "PN", "PCN", "Oceania"),
    ("Samoa", "WS", "WSM", "Oceania"),
    ("Solomon Islands", "SB", "SLB", "Oceania"),
    ("Tokelau", "TK", "TKL", "Oceania"),
    ("Tonga", "TO", "TON", "Oceania"),
    ("Tuvalu", "TV", "TUV", "Oceania"),
    ("United States Minor Outlying Islands", "UM", "UMI", "Oceania"),
    ("Vanuatu", "VU", "VUT", "Oceania"),
    ("Wallis and Futuna", "WF", "WLF", "Oceania"),
    // No region
    ("Antarctica", "AQ", "ATA", ""),
];
