//! Built-in default word list
//!
//! A sample pool of common English words spanning the supported lengths
//! (3–10). Used when no custom list is supplied; entries are uppercase and
//! run through the same validation pipeline as custom input.

/// Default candidate words
pub const DEFAULT_WORDS: &[&str] = &[
    "ABOUT", "ALERT", "ARGUE", "BEACH", "BRAIN", "BREAD", "BRING", "BROWN", "CHAIR", "CHILD",
    "CLEAN", "CLOCK", "CLOUD", "DANCE", "DREAM", "DRINK", "EARTH", "EMPTY", "ENJOY", "EQUAL",
    "EXACT", "FIGHT", "FLOOR", "FRUIT", "GLASS", "GRANT", "GRASS", "GREEN", "GROUP", "GUARD",
    "GUESS", "HEART", "HEAVY", "HORSE", "HOTEL", "HOUSE", "HUMAN", "IMAGE", "INPUT", "ISSUE",
    "JUDGE", "KNIFE", "LARGE", "LAUGH", "LAYER", "LEARN", "LEAVE", "LEGAL", "LIGHT", "LIMIT",
    "LOCAL", "LOGIC", "LUCKY", "LUNCH", "MAGIC", "MAJOR", "MARCH", "MATCH", "METAL", "MODEL",
    "MONEY", "MONTH", "MORAL", "MOUSE", "MOUTH", "MUSIC", "NIGHT", "NOBLE", "NOISE", "NORTH",
    "OCEAN", "OFFER", "ORDER", "OTHER", "OWNER", "PAINT", "PAPER", "PARTY", "PEACE", "PHONE",
    "PILOT", "PITCH", "PLACE", "PLANE", "PLANT", "PLATE", "POINT", "POUND", "POWER", "PRESS",
    "PRICE", "PRIDE", "PRIME", "PRIOR", "PROOF", "PROUD", "QUIET", "QUITE", "RADIO", "RAISE",
    "RANGE", "RAPID", "RATIO", "REACH", "REACT", "READY", "REALM", "REPLY", "RIGHT", "RIVER",
    "ROUND", "ROUTE", "ROYAL", "RURAL", "SCALE", "SCARE", "SCOPE", "SCORE", "SENSE", "SERVE",
    "SHADE", "SHAKE", "SHALL", "SHAPE", "SHARE", "SHARP", "SHEET", "SHELF", "SHIFT", "SHINE",
    "SHIRT", "SHOCK", "SHOOT", "SHORT", "SIGHT", "SILK", "SINCE", "SKILL", "SLEEP", "SLIDE",
    "SMALL", "SMART", "SMILE", "SMOKE", "SOLID", "SOLVE", "SOUND", "SOUTH", "SPACE", "SPEAK",
    "SPEED", "SPEND", "SQUARE", "STAFF", "STAGE", "STAND", "START", "STATE", "STEAM", "STEEL",
    "STICK", "STILL", "STONE", "STORE", "STORM", "STORY", "STUDY", "STYLE", "SUGAR", "SUPER",
    "SWEET", "TABLE", "TASTE", "TEACH", "THANK", "THEME", "THERE", "THING", "THINK", "THREE",
    "THROW", "TIGHT", "TIMES", "TIRED", "TITLE", "TODAY", "TOKEN", "TOTAL", "TOUCH", "TOUGH",
    "TOWER", "TRACK", "TRADE", "TRAIL", "TRAIN", "TREND", "TRIAL", "TRUCK", "TRULY", "TRUST",
    "TRUTH", "TWICE", "UNDER", "UNION", "UNITY", "UNTIL", "UPPER", "URBAN", "USAGE", "USUAL",
    "VALID", "VALUE", "VIDEO", "VIRUS", "VISIT", "VITAL", "VOICE", "WASTE", "WATCH", "WATER",
    "WEIGH", "WHEEL", "WHERE", "WHICH", "WHILE", "WHITE", "WHOLE", "WOMAN", "WORLD", "WORRY",
    "WORTH", "WOULD", "WRITE", "WRONG", "YIELD", "YOUNG", "YOUTH",
    // Four-letter words
    "ABLE", "ALSO", "AREA", "ARMY", "AWAY", "BABY", "BACK", "BALL", "BAND", "BANK",
    "BASE", "BATH", "BEAR", "BEAT", "BEDS", "BEER", "BELL", "BELT", "BENT", "BEST",
    "BILL", "BIRD", "BITE", "BLOW", "BLUE", "BOAT", "BODY", "BOMB", "BOND", "BONE",
    "BOOK", "BOOT", "BORN", "BOSS", "BOTH", "BOWL", "BURN", "BUSY", "CAKE", "CALL",
    "CALM", "CAME", "CAMP", "CARD", "CARE", "CASE", "CASH", "CAST", "CELL", "CHAT",
    "CHIP", "CITY", "CLUB", "COAL", "COAT", "CODE", "COLD", "COME", "COOK", "COOL",
    "COPY", "CORE", "COST", "CREW", "CROP", "DARK", "DATA", "DATE", "DEAL", "DEAR",
    "DEBT", "DECK", "DEEP", "DEER", "DESK", "DIET", "DIRT", "DISK", "DOES", "DONE",
    // Six-letter words
    "ACCEPT", "ACTION", "ACTIVE", "ADVICE", "AGENCY", "ALWAYS", "ANIMAL", "ANSWER",
    "ANYONE", "APPEAR", "APPLY", "AROUND", "ARRIVE", "ARTIST", "ASSUME", "ATTACK",
    "AUTHOR", "AVENUE", "BATTLE", "BEAUTY", "BECOME", "BEFORE", "BEHIND", "BELIEF",
    "BELONG", "BENEAT", "BESIDE", "BEYOND", "BORDER", "BOTTLE", "BOTTOM", "BRANCH",
    "BRIDGE", "BRIGHT", "BROKEN", "BUDGET", "BUILD", "BUTTON", "CAMERA", "CANCEL",
    "CANCER", "CANDLE", "CAPABL", "CAPITA", "CARBON", "CAREER", "CAREFU", "CENTER",
    // Shorter and longer words to cover the whole 3-10 range
    "CAT", "DOG", "SUN", "RUN", "BIG", "FLY", "TRY", "SKY", "USE", "WAR", "WIN", "YES",
    "HELLO", "WORLD", "SYSTEM", "COMPUTER", "LANGUAGE", "PROGRAM", "PROJECT", "QUALITY",
    "EXAMPLE", "PATTERN", "PROCESS", "DEVELOP", "VERSION", "FEATURE", "SUPPORT",
    "KNOWLEDGE", "EDUCATION", "TECHNOLOGY", "FRAMEWORK", "STRUCTURE",
];

/// The default list as raw word-list text
///
/// Callers compare against this to phrase "loaded N default words" versus
/// "using N custom words" in diagnostics; the classification itself happens
/// in the processor.
#[must_use]
pub fn default_list_text() -> String {
    DEFAULT_WORDS.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, LengthLimits};

    #[test]
    fn default_words_fit_game_constraints() {
        let limits = LengthLimits::default();
        let alphabet = Alphabet::default();
        for &word in DEFAULT_WORDS {
            assert!(
                limits.accepts(word.chars().count()),
                "'{word}' length out of range"
            );
            assert!(
                word.chars().all(|c| alphabet.contains(c)),
                "'{word}' has a character outside the alphabet"
            );
        }
    }

    #[test]
    fn default_text_round_trips_through_tokenizer() {
        let tokens = crate::wordlists::parse_tokens(&default_list_text());
        // The raw list repeats WORLD once; dedup keeps the first occurrence.
        assert_eq!(tokens.len(), DEFAULT_WORDS.len() - 1);
    }
}
