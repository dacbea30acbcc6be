/// Free-text spellings mapped onto the names the world topology uses.
///
/// Keys are already lowercased/trimmed. No target may appear as a key,
/// otherwise `normalize` would stop being idempotent.
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("usa", "united states of america"),
    ("us", "united states of america"),
    ("united states", "united states of america"),
    ("uk", "united kingdom"),
    ("great britain", "united kingdom"),
    ("uae", "united arab emirates"),
    ("russian federation", "russia"),
    ("czech republic", "czechia"),
    ("republic of korea", "south korea"),
    ("korea", "south korea"),
    ("dem. rep. korea", "north korea"),
    ("holland", "netherlands"),
    ("the netherlands", "netherlands"),
    ("bosnia and herzegovina", "bosnia and herz."),
    ("dominican republic", "dominican rep."),
    ("north macedonia", "macedonia"),
    ("ivory coast", "côte d'ivoire"),
    ("swaziland", "eswatini"),
];

/// Canonical key → ISO-3166-1 alpha-2 (lowercase).
///
/// Sub-national entries carry hyphenated regional codes; they are kept so
/// the table documents them, but `code_for` never resolves them.
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("argentina", "ar"),
    ("australia", "au"),
    ("austria", "at"),
    ("belarus", "by"),
    ("belgium", "be"),
    ("bosnia and herz.", "ba"),
    ("brazil", "br"),
    ("bulgaria", "bg"),
    ("canada", "ca"),
    ("chile", "cl"),
    ("china", "cn"),
    ("colombia", "co"),
    ("croatia", "hr"),
    ("cuba", "cu"),
    ("cyprus", "cy"),
    ("czechia", "cz"),
    ("côte d'ivoire", "ci"),
    ("denmark", "dk"),
    ("dominican rep.", "do"),
    ("egypt", "eg"),
    ("england", "gb-eng"),
    ("estonia", "ee"),
    ("eswatini", "sz"),
    ("finland", "fi"),
    ("france", "fr"),
    ("germany", "de"),
    ("greece", "gr"),
    ("hungary", "hu"),
    ("iceland", "is"),
    ("india", "in"),
    ("indonesia", "id"),
    ("ireland", "ie"),
    ("israel", "il"),
    ("italy", "it"),
    ("japan", "jp"),
    ("kenya", "ke"),
    ("latvia", "lv"),
    ("lithuania", "lt"),
    ("luxembourg", "lu"),
    ("macedonia", "mk"),
    ("malaysia", "my"),
    ("malta", "mt"),
    ("mexico", "mx"),
    ("montenegro", "me"),
    ("morocco", "ma"),
    ("netherlands", "nl"),
    ("new zealand", "nz"),
    ("north korea", "kp"),
    ("norway", "no"),
    ("peru", "pe"),
    ("philippines", "ph"),
    ("poland", "pl"),
    ("portugal", "pt"),
    ("romania", "ro"),
    ("russia", "ru"),
    ("scotland", "gb-sct"),
    ("serbia", "rs"),
    ("singapore", "sg"),
    ("slovakia", "sk"),
    ("slovenia", "si"),
    ("south africa", "za"),
    ("south korea", "kr"),
    ("spain", "es"),
    ("sweden", "se"),
    ("switzerland", "ch"),
    ("thailand", "th"),
    ("turkey", "tr"),
    ("ukraine", "ua"),
    ("united arab emirates", "ae"),
    ("united kingdom", "gb"),
    ("united states of america", "us"),
    ("venezuela", "ve"),
    ("vietnam", "vn"),
    ("wales", "gb-wls"),
];

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Canonical join key for a free-text country name.
///
/// Lowercases and trims, then applies the alias table. Unknown names pass
/// through (lowercased/trimmed) instead of failing.
pub fn normalize(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(lower)
}

/// ISO-3166-1 alpha-2 code for a country name, if it resolves to a sovereign entry.
pub fn code_for(name: &str) -> Option<&'static str> {
    let key = normalize(name);
    COUNTRY_CODES
        .iter()
        .find(|(canonical, _)| *canonical == key)
        .map(|(_, code)| *code)
        .filter(|code| !code.contains('-'))
}

/// Regional-indicator flag for a two-letter code. Empty for anything else.
pub fn flag_glyph(code: Option<&str>) -> String {
    let Some(code) = code else {
        return String::new();
    };
    let bytes = code.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
        return String::new();
    }
    bytes
        .iter()
        .filter_map(|b| {
            let offset = (b.to_ascii_uppercase() - b'A') as u32;
            char::from_u32(REGIONAL_INDICATOR_A + offset)
        })
        .collect()
}

pub fn flag_for(name: &str) -> String {
    flag_glyph(code_for(name))
}
