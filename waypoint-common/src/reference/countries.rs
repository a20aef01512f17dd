//! Country catalog
//!
//! 193 UN member states plus the two observer states, keyed by ISO 3166-1 alpha-2.

use super::Country;

const fn country(
    id: &'static str,
    name: &'static str,
    capital: &'static str,
    continent_id: &'static str,
    flag: &'static str,
) -> Country {
    Country {
        id,
        name,
        capital,
        continent_id,
        flag,
    }
}

pub static COUNTRIES: &[Country] = &[
    // africa
    country("DZ", "Algeria", "Algiers", "africa", "🇩🇿"),
    country("AO", "Angola", "Luanda", "africa", "🇦🇴"),
    country("BJ", "Benin", "Porto-Novo", "africa", "🇧🇯"),
    country("BW", "Botswana", "Gaborone", "africa", "🇧🇼"),
    country("BF", "Burkina Faso", "Ouagadougou", "africa", "🇧🇫"),
    country("BI", "Burundi", "Gitega", "africa", "🇧🇮"),
    country("CV", "Cabo Verde", "Praia", "africa", "🇨🇻"),
    country("CM", "Cameroon", "Yaoundé", "africa", "🇨🇲"),
    country("CF", "Central African Republic", "Bangui", "africa", "🇨🇫"),
    country("TD", "Chad", "N'Djamena", "africa", "🇹🇩"),
    country("KM", "Comoros", "Moroni", "africa", "🇰🇲"),
    country("CG", "Congo", "Brazzaville", "africa", "🇨🇬"),
    country("CD", "Democratic Republic of the Congo", "Kinshasa", "africa", "🇨🇩"),
    country("CI", "Côte d'Ivoire", "Yamoussoukro", "africa", "🇨🇮"),
    country("DJ", "Djibouti", "Djibouti", "africa", "🇩🇯"),
    country("EG", "Egypt", "Cairo", "africa", "🇪🇬"),
    country("GQ", "Equatorial Guinea", "Malabo", "africa", "🇬🇶"),
    country("ER", "Eritrea", "Asmara", "africa", "🇪🇷"),
    country("SZ", "Eswatini", "Mbabane", "africa", "🇸🇿"),
    country("ET", "Ethiopia", "Addis Ababa", "africa", "🇪🇹"),
    country("GA", "Gabon", "Libreville", "africa", "🇬🇦"),
    country("GM", "Gambia", "Banjul", "africa", "🇬🇲"),
    country("GH", "Ghana", "Accra", "africa", "🇬🇭"),
    country("GN", "Guinea", "Conakry", "africa", "🇬🇳"),
    country("GW", "Guinea-Bissau", "Bissau", "africa", "🇬🇼"),
    country("KE", "Kenya", "Nairobi", "africa", "🇰🇪"),
    country("LS", "Lesotho", "Maseru", "africa", "🇱🇸"),
    country("LR", "Liberia", "Monrovia", "africa", "🇱🇷"),
    country("LY", "Libya", "Tripoli", "africa", "🇱🇾"),
    country("MG", "Madagascar", "Antananarivo", "africa", "🇲🇬"),
    country("MW", "Malawi", "Lilongwe", "africa", "🇲🇼"),
    country("ML", "Mali", "Bamako", "africa", "🇲🇱"),
    country("MR", "Mauritania", "Nouakchott", "africa", "🇲🇷"),
    country("MU", "Mauritius", "Port Louis", "africa", "🇲🇺"),
    country("MA", "Morocco", "Rabat", "africa", "🇲🇦"),
    country("MZ", "Mozambique", "Maputo", "africa", "🇲🇿"),
    country("NA", "Namibia", "Windhoek", "africa", "🇳🇦"),
    country("NE", "Niger", "Niamey", "africa", "🇳🇪"),
    country("NG", "Nigeria", "Abuja", "africa", "🇳🇬"),
    country("RW", "Rwanda", "Kigali", "africa", "🇷🇼"),
    country("ST", "São Tomé and Príncipe", "São Tomé", "africa", "🇸🇹"),
    country("SN", "Senegal", "Dakar", "africa", "🇸🇳"),
    country("SC", "Seychelles", "Victoria", "africa", "🇸🇨"),
    country("SL", "Sierra Leone", "Freetown", "africa", "🇸🇱"),
    country("SO", "Somalia", "Mogadishu", "africa", "🇸🇴"),
    country("ZA", "South Africa", "Pretoria", "africa", "🇿🇦"),
    country("SS", "South Sudan", "Juba", "africa", "🇸🇸"),
    country("SD", "Sudan", "Khartoum", "africa", "🇸🇩"),
    country("TZ", "Tanzania", "Dodoma", "africa", "🇹🇿"),
    country("TG", "Togo", "Lomé", "africa", "🇹🇬"),
    country("TN", "Tunisia", "Tunis", "africa", "🇹🇳"),
    country("UG", "Uganda", "Kampala", "africa", "🇺🇬"),
    country("ZM", "Zambia", "Lusaka", "africa", "🇿🇲"),
    country("ZW", "Zimbabwe", "Harare", "africa", "🇿🇼"),
    // asia
    country("AF", "Afghanistan", "Kabul", "asia", "🇦🇫"),
    country("AM", "Armenia", "Yerevan", "asia", "🇦🇲"),
    country("AZ", "Azerbaijan", "Baku", "asia", "🇦🇿"),
    country("BH", "Bahrain", "Manama", "asia", "🇧🇭"),
    country("BD", "Bangladesh", "Dhaka", "asia", "🇧🇩"),
    country("BT", "Bhutan", "Thimphu", "asia", "🇧🇹"),
    country("BN", "Brunei", "Bandar Seri Begawan", "asia", "🇧🇳"),
    country("KH", "Cambodia", "Phnom Penh", "asia", "🇰🇭"),
    country("CN", "China", "Beijing", "asia", "🇨🇳"),
    country("CY", "Cyprus", "Nicosia", "asia", "🇨🇾"),
    country("GE", "Georgia", "Tbilisi", "asia", "🇬🇪"),
    country("IN", "India", "New Delhi", "asia", "🇮🇳"),
    country("ID", "Indonesia", "Jakarta", "asia", "🇮🇩"),
    country("IR", "Iran", "Tehran", "asia", "🇮🇷"),
    country("IQ", "Iraq", "Baghdad", "asia", "🇮🇶"),
    country("IL", "Israel", "Jerusalem", "asia", "🇮🇱"),
    country("JP", "Japan", "Tokyo", "asia", "🇯🇵"),
    country("JO", "Jordan", "Amman", "asia", "🇯🇴"),
    country("KZ", "Kazakhstan", "Astana", "asia", "🇰🇿"),
    country("KW", "Kuwait", "Kuwait City", "asia", "🇰🇼"),
    country("KG", "Kyrgyzstan", "Bishkek", "asia", "🇰🇬"),
    country("LA", "Laos", "Vientiane", "asia", "🇱🇦"),
    country("LB", "Lebanon", "Beirut", "asia", "🇱🇧"),
    country("MY", "Malaysia", "Kuala Lumpur", "asia", "🇲🇾"),
    country("MV", "Maldives", "Malé", "asia", "🇲🇻"),
    country("MN", "Mongolia", "Ulaanbaatar", "asia", "🇲🇳"),
    country("MM", "Myanmar", "Naypyidaw", "asia", "🇲🇲"),
    country("NP", "Nepal", "Kathmandu", "asia", "🇳🇵"),
    country("KP", "North Korea", "Pyongyang", "asia", "🇰🇵"),
    country("OM", "Oman", "Muscat", "asia", "🇴🇲"),
    country("PK", "Pakistan", "Islamabad", "asia", "🇵🇰"),
    country("PS", "Palestine", "Ramallah", "asia", "🇵🇸"),
    country("PH", "Philippines", "Manila", "asia", "🇵🇭"),
    country("QA", "Qatar", "Doha", "asia", "🇶🇦"),
    country("SA", "Saudi Arabia", "Riyadh", "asia", "🇸🇦"),
    country("SG", "Singapore", "Singapore", "asia", "🇸🇬"),
    country("KR", "South Korea", "Seoul", "asia", "🇰🇷"),
    country("LK", "Sri Lanka", "Sri Jayawardenepura Kotte", "asia", "🇱🇰"),
    country("SY", "Syria", "Damascus", "asia", "🇸🇾"),
    country("TJ", "Tajikistan", "Dushanbe", "asia", "🇹🇯"),
    country("TH", "Thailand", "Bangkok", "asia", "🇹🇭"),
    country("TL", "Timor-Leste", "Dili", "asia", "🇹🇱"),
    country("TR", "Turkey", "Ankara", "asia", "🇹🇷"),
    country("TM", "Turkmenistan", "Ashgabat", "asia", "🇹🇲"),
    country("AE", "United Arab Emirates", "Abu Dhabi", "asia", "🇦🇪"),
    country("UZ", "Uzbekistan", "Tashkent", "asia", "🇺🇿"),
    country("VN", "Vietnam", "Hanoi", "asia", "🇻🇳"),
    country("YE", "Yemen", "Sana'a", "asia", "🇾🇪"),
    // europe
    country("AL", "Albania", "Tirana", "europe", "🇦🇱"),
    country("AD", "Andorra", "Andorra la Vella", "europe", "🇦🇩"),
    country("AT", "Austria", "Vienna", "europe", "🇦🇹"),
    country("BY", "Belarus", "Minsk", "europe", "🇧🇾"),
    country("BE", "Belgium", "Brussels", "europe", "🇧🇪"),
    country("BA", "Bosnia and Herzegovina", "Sarajevo", "europe", "🇧🇦"),
    country("BG", "Bulgaria", "Sofia", "europe", "🇧🇬"),
    country("HR", "Croatia", "Zagreb", "europe", "🇭🇷"),
    country("CZ", "Czechia", "Prague", "europe", "🇨🇿"),
    country("DK", "Denmark", "Copenhagen", "europe", "🇩🇰"),
    country("EE", "Estonia", "Tallinn", "europe", "🇪🇪"),
    country("FI", "Finland", "Helsinki", "europe", "🇫🇮"),
    country("FR", "France", "Paris", "europe", "🇫🇷"),
    country("DE", "Germany", "Berlin", "europe", "🇩🇪"),
    country("GR", "Greece", "Athens", "europe", "🇬🇷"),
    country("HU", "Hungary", "Budapest", "europe", "🇭🇺"),
    country("IS", "Iceland", "Reykjavík", "europe", "🇮🇸"),
    country("IE", "Ireland", "Dublin", "europe", "🇮🇪"),
    country("IT", "Italy", "Rome", "europe", "🇮🇹"),
    country("LV", "Latvia", "Riga", "europe", "🇱🇻"),
    country("LI", "Liechtenstein", "Vaduz", "europe", "🇱🇮"),
    country("LT", "Lithuania", "Vilnius", "europe", "🇱🇹"),
    country("LU", "Luxembourg", "Luxembourg", "europe", "🇱🇺"),
    country("MT", "Malta", "Valletta", "europe", "🇲🇹"),
    country("MD", "Moldova", "Chișinău", "europe", "🇲🇩"),
    country("MC", "Monaco", "Monaco", "europe", "🇲🇨"),
    country("ME", "Montenegro", "Podgorica", "europe", "🇲🇪"),
    country("NL", "Netherlands", "Amsterdam", "europe", "🇳🇱"),
    country("MK", "North Macedonia", "Skopje", "europe", "🇲🇰"),
    country("NO", "Norway", "Oslo", "europe", "🇳🇴"),
    country("PL", "Poland", "Warsaw", "europe", "🇵🇱"),
    country("PT", "Portugal", "Lisbon", "europe", "🇵🇹"),
    country("RO", "Romania", "Bucharest", "europe", "🇷🇴"),
    country("RU", "Russia", "Moscow", "europe", "🇷🇺"),
    country("SM", "San Marino", "San Marino", "europe", "🇸🇲"),
    country("RS", "Serbia", "Belgrade", "europe", "🇷🇸"),
    country("SK", "Slovakia", "Bratislava", "europe", "🇸🇰"),
    country("SI", "Slovenia", "Ljubljana", "europe", "🇸🇮"),
    country("ES", "Spain", "Madrid", "europe", "🇪🇸"),
    country("SE", "Sweden", "Stockholm", "europe", "🇸🇪"),
    country("CH", "Switzerland", "Bern", "europe", "🇨🇭"),
    country("UA", "Ukraine", "Kyiv", "europe", "🇺🇦"),
    country("GB", "United Kingdom", "London", "europe", "🇬🇧"),
    country("VA", "Vatican City", "Vatican City", "europe", "🇻🇦"),
    // north-america
    country("AG", "Antigua and Barbuda", "Saint John's", "north-america", "🇦🇬"),
    country("BS", "Bahamas", "Nassau", "north-america", "🇧🇸"),
    country("BB", "Barbados", "Bridgetown", "north-america", "🇧🇧"),
    country("BZ", "Belize", "Belmopan", "north-america", "🇧🇿"),
    country("CA", "Canada", "Ottawa", "north-america", "🇨🇦"),
    country("CR", "Costa Rica", "San José", "north-america", "🇨🇷"),
    country("CU", "Cuba", "Havana", "north-america", "🇨🇺"),
    country("DM", "Dominica", "Roseau", "north-america", "🇩🇲"),
    country("DO", "Dominican Republic", "Santo Domingo", "north-america", "🇩🇴"),
    country("SV", "El Salvador", "San Salvador", "north-america", "🇸🇻"),
    country("GD", "Grenada", "Saint George's", "north-america", "🇬🇩"),
    country("GT", "Guatemala", "Guatemala City", "north-america", "🇬🇹"),
    country("HT", "Haiti", "Port-au-Prince", "north-america", "🇭🇹"),
    country("HN", "Honduras", "Tegucigalpa", "north-america", "🇭🇳"),
    country("JM", "Jamaica", "Kingston", "north-america", "🇯🇲"),
    country("MX", "Mexico", "Mexico City", "north-america", "🇲🇽"),
    country("NI", "Nicaragua", "Managua", "north-america", "🇳🇮"),
    country("PA", "Panama", "Panama City", "north-america", "🇵🇦"),
    country("KN", "Saint Kitts and Nevis", "Basseterre", "north-america", "🇰🇳"),
    country("LC", "Saint Lucia", "Castries", "north-america", "🇱🇨"),
    country("VC", "Saint Vincent and the Grenadines", "Kingstown", "north-america", "🇻🇨"),
    country("TT", "Trinidad and Tobago", "Port of Spain", "north-america", "🇹🇹"),
    country("US", "United States", "Washington, D.C.", "north-america", "🇺🇸"),
    // south-america
    country("AR", "Argentina", "Buenos Aires", "south-america", "🇦🇷"),
    country("BO", "Bolivia", "Sucre", "south-america", "🇧🇴"),
    country("BR", "Brazil", "Brasília", "south-america", "🇧🇷"),
    country("CL", "Chile", "Santiago", "south-america", "🇨🇱"),
    country("CO", "Colombia", "Bogotá", "south-america", "🇨🇴"),
    country("EC", "Ecuador", "Quito", "south-america", "🇪🇨"),
    country("GY", "Guyana", "Georgetown", "south-america", "🇬🇾"),
    country("PY", "Paraguay", "Asunción", "south-america", "🇵🇾"),
    country("PE", "Peru", "Lima", "south-america", "🇵🇪"),
    country("SR", "Suriname", "Paramaribo", "south-america", "🇸🇷"),
    country("UY", "Uruguay", "Montevideo", "south-america", "🇺🇾"),
    country("VE", "Venezuela", "Caracas", "south-america", "🇻🇪"),
    // oceania
    country("AU", "Australia", "Canberra", "oceania", "🇦🇺"),
    country("FJ", "Fiji", "Suva", "oceania", "🇫🇯"),
    country("KI", "Kiribati", "South Tarawa", "oceania", "🇰🇮"),
    country("MH", "Marshall Islands", "Majuro", "oceania", "🇲🇭"),
    country("FM", "Micronesia", "Palikir", "oceania", "🇫🇲"),
    country("NR", "Nauru", "Yaren", "oceania", "🇳🇷"),
    country("NZ", "New Zealand", "Wellington", "oceania", "🇳🇿"),
    country("PW", "Palau", "Ngerulmud", "oceania", "🇵🇼"),
    country("PG", "Papua New Guinea", "Port Moresby", "oceania", "🇵🇬"),
    country("WS", "Samoa", "Apia", "oceania", "🇼🇸"),
    country("SB", "Solomon Islands", "Honiara", "oceania", "🇸🇧"),
    country("TO", "Tonga", "Nukuʻalofa", "oceania", "🇹🇴"),
    country("TV", "Tuvalu", "Funafuti", "oceania", "🇹🇻"),
    country("VU", "Vanuatu", "Port Vila", "oceania", "🇻🇺"),
];
