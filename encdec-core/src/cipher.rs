//! Shift cipher strategies.
//!
//! A [`Cipher`] transforms text one UTF-16 code unit at a time. Which units are transformed, and
//! around which alphabet they wrap, depends on the [`Algorithm`].

use crate::consts::*;
use crate::error::Error;

use std::fmt;
use std::str::FromStr;

/// The direction of the transformation.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Default)]
pub enum Mode {
    /// Shift forward.
    #[default]
    Encrypt,
    /// Shift backward.
    Decrypt,
}

impl Mode {
    /// The textual form used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Encrypt => MODE_ENCRYPT,
            Mode::Decrypt => MODE_DECRYPT,
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MODE_ENCRYPT => Ok(Mode::Encrypt),
            MODE_DECRYPT => Ok(Mode::Decrypt),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported alphabet models.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Default)]
pub enum Algorithm {
    /// Shift every code unit around [`UNICODE_ALPHABET_SIZE`].
    #[default]
    Unicode,
    /// Shift ASCII letters within their case, leave everything else alone.
    Shift,
}

impl Algorithm {
    /// The textual form used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Unicode => ALG_UNICODE,
            Algorithm::Shift => ALG_SHIFT,
        }
    }

    /// The number of symbols this algorithm wraps around.
    pub fn alphabet_size(&self) -> i64 {
        match self {
            Algorithm::Unicode => UNICODE_ALPHABET_SIZE,
            Algorithm::Shift => LETTER_ALPHABET_SIZE,
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ALG_UNICODE => Ok(Algorithm::Unicode),
            ALG_SHIFT => Ok(Algorithm::Shift),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shift cipher: an [`Algorithm`] together with a shift amount.
///
/// Any shift is accepted, only its floored remainder modulo the alphabet size matters. Decrypting
/// with the same shift undoes encryption for every code unit except `0xFFFF` under
/// [`Algorithm::Unicode`].
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Cipher {
    algorithm: Algorithm,
    shift: i64,
}

impl Cipher {
    /// Create a new cipher.
    pub fn new(algorithm: Algorithm, shift: i64) -> Self {
        Self { algorithm, shift }
    }

    /// The alphabet model.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The shift amount, as given.
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// Encrypt a single code unit.
    pub fn encrypt_unit(&self, unit: u16) -> u16 {
        self.rotate(unit, self.offset())
    }

    /// Decrypt a single code unit.
    pub fn decrypt_unit(&self, unit: u16) -> u16 {
        let size = self.algorithm.alphabet_size();
        self.rotate(unit, (size - self.offset()) % size)
    }

    /// Encrypt or decrypt a single code unit.
    pub fn apply(&self, mode: Mode, unit: u16) -> u16 {
        match mode {
            Mode::Encrypt => self.encrypt_unit(unit),
            Mode::Decrypt => self.decrypt_unit(unit),
        }
    }

    /// Transform a message, preserving its length and order.
    pub fn transform(&self, mode: Mode, units: &[u16]) -> Vec<u16> {
        units.iter().map(|&u| self.apply(mode, u)).collect()
    }

    /// Encrypt a string.
    ///
    /// Code units that do not form valid UTF-16 after shifting are replaced by U+FFFD.
    pub fn encrypt_str(&self, message: &str) -> String {
        self.transform_str(Mode::Encrypt, message)
    }

    /// Decrypt a string.
    ///
    /// Code units that do not form valid UTF-16 after shifting are replaced by U+FFFD.
    pub fn decrypt_str(&self, message: &str) -> String {
        self.transform_str(Mode::Decrypt, message)
    }

    fn transform_str(&self, mode: Mode, message: &str) -> String {
        decode_units(&self.transform_text(mode, message)).0
    }

    /// Transform the UTF-16 code units of a string.
    pub fn transform_text(&self, mode: Mode, message: &str) -> Vec<u16> {
        let units: Vec<u16> = message.encode_utf16().collect();
        self.transform(mode, &units)
    }

    // Always in [0, alphabet size), whatever the sign or magnitude of the shift.
    fn offset(&self) -> i64 {
        self.shift.rem_euclid(self.algorithm.alphabet_size())
    }

    fn rotate(&self, unit: u16, offset: i64) -> u16 {
        match self.algorithm {
            Algorithm::Unicode => ((i64::from(unit) + offset) % UNICODE_ALPHABET_SIZE) as u16,
            Algorithm::Shift => match unit {
                0x61..=0x7A => rotate_letter(unit, u16::from(b'a'), offset),
                0x41..=0x5A => rotate_letter(unit, u16::from(b'A'), offset),
                _ => unit,
            },
        }
    }
}

/// Decode code units into a string, replacing unpaired surrogates with U+FFFD.
///
/// The flag tells whether any replacement took place.
pub fn decode_units(units: &[u16]) -> (String, bool) {
    match String::from_utf16(units) {
        Ok(text) => (text, false),
        Err(_) => (String::from_utf16_lossy(units), true),
    }
}

fn rotate_letter(unit: u16, base: u16, offset: i64) -> u16 {
    let pos = i64::from(unit - base);
    base + ((pos + offset) % LETTER_ALPHABET_SIZE) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn letters() -> impl Iterator<Item = u16> {
        (u16::from(b'a')..=u16::from(b'z')).chain(u16::from(b'A')..=u16::from(b'Z'))
    }

    fn random_keys(n: usize) -> Vec<i64> {
        let mut rng = rand::thread_rng();
        let mut keys: Vec<i64> = (0..n).map(|_| rng.gen()).collect();
        keys.extend([0, 1, -1, 25, 26, 27, -26, 65534, 65535, 65536, i64::MIN, i64::MAX]);
        keys
    }

    #[test]
    fn test_shift_examples() {
        let c = Cipher::new(Algorithm::Shift, 3);
        assert_eq!(c.encrypt_str("abcXYZ"), "defABC");
        assert_eq!(c.encrypt_str("xyz"), "abc");
        assert_eq!(c.decrypt_str("defABC"), "abcXYZ");

        let c = Cipher::new(Algorithm::Shift, -3);
        assert_eq!(c.encrypt_str("def"), "abc");
    }

    #[test]
    fn test_shift_keeps_punctuation() {
        let c = Cipher::new(Algorithm::Shift, 5);
        assert_eq!(c.encrypt_str("Welcome to hyperskill!"), "Bjqhtrj yt mdujwxpnqq!");
        assert_eq!(c.decrypt_str("Bjqhtrj yt mdujwxpnqq!"), "Welcome to hyperskill!");
    }

    #[test]
    fn test_unicode_examples() {
        let c = Cipher::new(Algorithm::Unicode, 1);
        assert_eq!(c.encrypt_str("a"), "b");
        assert_eq!(c.decrypt_str("b"), "a");

        let c = Cipher::new(Algorithm::Unicode, 5);
        assert_eq!(c.encrypt_str("Hello"), "Mjqqt");
    }

    #[test]
    fn test_empty_message() {
        for alg in [Algorithm::Shift, Algorithm::Unicode] {
            for key in random_keys(8) {
                let c = Cipher::new(alg, key);
                assert_eq!(c.encrypt_str(""), "");
                assert_eq!(c.decrypt_str(""), "");
            }
        }
    }

    #[test]
    fn test_shift_roundtrip() {
        for key in random_keys(64) {
            let c = Cipher::new(Algorithm::Shift, key);
            for u in letters() {
                assert_eq!(c.decrypt_unit(c.encrypt_unit(u)), u, "key {key}, unit {u}");
                assert_eq!(c.encrypt_unit(c.decrypt_unit(u)), u, "key {key}, unit {u}");
            }
        }
    }

    #[test]
    fn test_shift_stays_within_case() {
        for key in random_keys(64) {
            let c = Cipher::new(Algorithm::Shift, key);
            for u in u16::from(b'a')..=u16::from(b'z') {
                assert!(char::from_u32(c.encrypt_unit(u).into())
                    .unwrap()
                    .is_ascii_lowercase());
            }
            for u in u16::from(b'A')..=u16::from(b'Z') {
                assert!(char::from_u32(c.decrypt_unit(u).into())
                    .unwrap()
                    .is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_shift_identity_on_non_letters() {
        let non_letters = (0..=u16::MAX).filter(|u| !letters().any(|l| l == *u));
        let c = Cipher::new(Algorithm::Shift, 7);
        for u in non_letters {
            assert_eq!(c.encrypt_unit(u), u);
            assert_eq!(c.decrypt_unit(u), u);
        }

        for key in random_keys(16) {
            let c = Cipher::new(Algorithm::Shift, key);
            assert_eq!(c.encrypt_str("0123 ,.!? éß 漢字"), "0123 ,.!? éß 漢字");
        }
    }

    #[test]
    fn test_unicode_roundtrip() {
        for key in random_keys(16) {
            let c = Cipher::new(Algorithm::Unicode, key);
            for u in 0..u16::MAX {
                assert_eq!(c.decrypt_unit(c.encrypt_unit(u)), u, "key {key}, unit {u}");
            }
        }
    }

    #[test]
    fn test_unicode_top_unit_wraps_to_zero() {
        let c = Cipher::new(Algorithm::Unicode, 0);
        assert_eq!(c.encrypt_unit(0xFFFF), 0);
        assert_eq!(c.decrypt_unit(0xFFFF), 0);

        let c = Cipher::new(Algorithm::Unicode, 1);
        assert_eq!(c.encrypt_unit(0xFFFE), 0);
        assert_eq!(c.decrypt_unit(0), 0xFFFE);
    }

    #[test]
    fn test_decode_units() {
        assert_eq!(decode_units(&units("abc")), ("abc".to_string(), false));
        assert_eq!(decode_units(&[]), (String::new(), false));
        assert_eq!(
            decode_units(&[0x61, 0xD800, 0x62]),
            ("a\u{FFFD}b".to_string(), true)
        );

        let c = Cipher::new(Algorithm::Unicode, 0xD800 - 0x61);
        assert_eq!(c.transform_text(Mode::Encrypt, "a"), vec![0xD800]);
        assert_eq!(c.encrypt_str("a"), "\u{FFFD}");
    }

    #[test]
    fn test_periodicity() {
        let mut rng = rand::thread_rng();
        let message = units("The quick brown fox, 1234! ÄÖÜ");

        for _ in 0..64 {
            let key: i64 = rng.gen_range(-1_000_000..1_000_000);

            let a = Cipher::new(Algorithm::Shift, key);
            let b = Cipher::new(Algorithm::Shift, key + LETTER_ALPHABET_SIZE);
            assert_eq!(a.transform(Mode::Encrypt, &message), b.transform(Mode::Encrypt, &message));
            assert_eq!(a.transform(Mode::Decrypt, &message), b.transform(Mode::Decrypt, &message));

            let a = Cipher::new(Algorithm::Unicode, key);
            let b = Cipher::new(Algorithm::Unicode, key + UNICODE_ALPHABET_SIZE);
            assert_eq!(a.transform(Mode::Encrypt, &message), b.transform(Mode::Encrypt, &message));
            assert_eq!(a.transform(Mode::Decrypt, &message), b.transform(Mode::Decrypt, &message));
        }
    }

    #[test]
    fn test_length_preserved() {
        let mut rng = rand::thread_rng();

        for len in [0, 1, 17, 1024] {
            let message: Vec<u16> = (0..len).map(|_| rng.gen()).collect();
            for alg in [Algorithm::Shift, Algorithm::Unicode] {
                let c = Cipher::new(alg, rng.gen());
                assert_eq!(c.transform(Mode::Encrypt, &message).len(), len);
                assert_eq!(c.transform(Mode::Decrypt, &message).len(), len);
            }
        }
    }

    #[test]
    fn test_parse_mode_and_algorithm() {
        assert_eq!("enc".parse::<Mode>().unwrap(), Mode::Encrypt);
        assert_eq!("dec".parse::<Mode>().unwrap(), Mode::Decrypt);
        assert!(matches!("encrypt".parse::<Mode>(), Err(Error::UnknownMode(m)) if m == "encrypt"));

        assert_eq!("unicode".parse::<Algorithm>().unwrap(), Algorithm::Unicode);
        assert_eq!("shift".parse::<Algorithm>().unwrap(), Algorithm::Shift);
        assert!(matches!("rot13".parse::<Algorithm>(), Err(Error::UnknownAlgorithm(_))));

        assert_eq!(Mode::default(), Mode::Encrypt);
        assert_eq!(Algorithm::default(), Algorithm::Unicode);
        assert_eq!(Mode::Decrypt.to_string(), "dec");
        assert_eq!(Algorithm::Shift.to_string(), "shift");
    }
}
