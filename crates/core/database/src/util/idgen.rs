use data_encoding::BASE32_NOPAD;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Vocabulary event ids are built from
pub static WORDS: [&str; 66] = [
    "ember", "falcon", "plum", "violet", "orbit", "river", "thunder", "cinder", "puzzle", "lumen",
    "hazel", "comet", "atlas", "raven", "mango", "cedar", "opal", "breeze", "quantum", "saffron",
    "zenith", "pickle", "marble", "anchor", "lantern", "kestrel", "glacier", "squid", "pepper",
    "nectar", "spruce", "jigsaw", "cobalt", "fjord", "tulip", "aurora", "socket", "crystal",
    "mosaic", "pirate", "canyon", "whisper", "rocket", "basil", "matrix", "copper", "plasma",
    "fable", "cashew", "goblin", "vortex", "sugar", "radar", "cactus", "magnet", "tiger", "kiwi",
    "octane", "sphinx", "dragon", "sailor", "waffle", "ripple", "velvet", "banjo", "scooter",
];

/// Number of words at the start of an id
pub const WORD_COUNT: usize = 3;

/// Random bytes backing the suffix, encodes to 8 base32 characters
pub const SUFFIX_BYTES: usize = 5;

/// Length of the encoded suffix
pub const SUFFIX_LENGTH: usize = 8;

/// Generate a new event id using the operating system's random source
pub fn generate_event_id() -> String {
    generate_event_id_with(&mut OsRng)
}

/// Generate a new event id of the form `word-word-word-SUFFIX`
pub fn generate_event_id_with<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(WORD_COUNT + 1);
    for _ in 0..WORD_COUNT {
        parts.push(WORDS[rng.gen_range(0..WORDS.len())]);
    }

    let mut bytes = [0u8; SUFFIX_BYTES];
    rng.fill_bytes(&mut bytes);
    let suffix = BASE32_NOPAD.encode(&bytes);

    parts.push(&suffix);
    parts.join("-")
}

/// Check whether a string has the shape of a generated event id
pub fn is_event_id(id: &str) -> bool {
    let parts: Vec<&str> = id.split('-').collect();
    if parts.len() != WORD_COUNT + 1 {
        return false;
    }

    let (words, suffix) = parts.split_at(WORD_COUNT);
    words.iter().all(|word| WORDS.contains(word))
        && suffix[0].len() == SUFFIX_LENGTH
        && suffix[0]
            .bytes()
            .all(|c| c.is_ascii_uppercase() || (b'2'..=b'7').contains(&c))
}
