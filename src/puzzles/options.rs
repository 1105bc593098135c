//! Shareable puzzle options
//!
//! A puzzle travels as JSON (`words`, `names`, `author`, `title`) encoded
//! with standard base64, usually as the `options` query parameter of a play
//! link. Shape is checked before any `Puzzle` is built; a malformed parameter
//! never starts a session.

use crate::core::{CATEGORY_COUNT, Category, GROUP_SIZE, Puzzle, PuzzleError, Word};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

/// Query parameter that carries the encoded puzzle
pub const OPTIONS_KEY: &str = "options";

/// Wire form of a puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleOptions {
    pub words: Vec<Vec<String>>,
    pub names: Vec<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
}

impl PuzzleOptions {
    /// Check the 4 names × 4 words shape
    ///
    /// # Errors
    /// Returns `PuzzleError::Shape` describing the first mismatch.
    pub fn validate_shape(&self) -> Result<(), PuzzleError> {
        expect_len("category names", CATEGORY_COUNT, self.names.len())?;
        expect_len("categories", CATEGORY_COUNT, self.words.len())?;
        for group in &self.words {
            expect_len("words per category", GROUP_SIZE, group.len())?;
        }
        Ok(())
    }

    /// Check that every word and category name is filled in
    ///
    /// This is the only check applied when authoring. Title and author stay
    /// optional.
    ///
    /// # Errors
    /// Returns a shape error, or `MissingWord`/`MissingName` naming the
    /// first incomplete category (1-based).
    pub fn validate_complete(&self) -> Result<(), PuzzleError> {
        self.validate_shape()?;

        if let Some(category) = self
            .words
            .iter()
            .position(|group| group.iter().any(|w| w.trim().is_empty()))
        {
            return Err(PuzzleError::MissingWord {
                category: category + 1,
            });
        }

        if let Some(category) = self.names.iter().position(|n| n.trim().is_empty()) {
            return Err(PuzzleError::MissingName {
                category: category + 1,
            });
        }

        Ok(())
    }

    /// Build the puzzle
    ///
    /// # Errors
    /// Returns an error for a bad shape, an empty word, or a word shared
    /// between categories.
    pub fn to_puzzle(&self) -> Result<Puzzle, PuzzleError> {
        self.validate_shape()?;

        let mut categories = Vec::with_capacity(CATEGORY_COUNT);
        for (position, (name, group)) in self.names.iter().zip(&self.words).enumerate() {
            let words = group
                .iter()
                .map(Word::new)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| PuzzleError::MissingWord {
                    category: position + 1,
                })?;
            let words: [Word; GROUP_SIZE] = words.try_into().map_err(|w: Vec<Word>| {
                PuzzleError::Shape {
                    what: "words per category",
                    expected: GROUP_SIZE,
                    actual: w.len(),
                }
            })?;
            categories.push(Category::new(name.trim(), words));
        }

        let categories: [Category; CATEGORY_COUNT] =
            categories.try_into().map_err(|c: Vec<Category>| PuzzleError::Shape {
                what: "categories",
                expected: CATEGORY_COUNT,
                actual: c.len(),
            })?;

        Puzzle::new(self.title.trim(), self.author.trim(), categories)
    }

    /// Encode as a base64 `options` parameter
    ///
    /// # Errors
    /// Returns `PuzzleError::Json` if serialisation fails.
    pub fn encode(&self) -> Result<String, PuzzleError> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Decode a bare parameter or a link containing `options=`
    ///
    /// # Errors
    /// Returns an error if the text is not base64, not JSON of the expected
    /// form, or not 4×4.
    pub fn decode(input: &str) -> Result<Self, PuzzleError> {
        let param = extract_param(input)?;
        let bytes = STANDARD.decode(param.as_bytes())?;
        let options: Self = serde_json::from_slice(&bytes)?;
        options.validate_shape()?;
        Ok(options)
    }
}

impl From<&Puzzle> for PuzzleOptions {
    fn from(puzzle: &Puzzle) -> Self {
        let categories = puzzle.categories();
        Self {
            words: categories
                .iter()
                .map(|c| c.words().iter().map(|w| w.text().to_string()).collect())
                .collect(),
            names: categories.iter().map(|c| c.name().to_string()).collect(),
            author: puzzle.author().to_string(),
            title: puzzle.title().to_string(),
        }
    }
}

/// Decode straight to a puzzle
///
/// # Errors
/// See [`PuzzleOptions::decode`] and [`PuzzleOptions::to_puzzle`].
pub fn decode(input: &str) -> Result<Puzzle, PuzzleError> {
    PuzzleOptions::decode(input)?.to_puzzle()
}

/// Encode a puzzle as a base64 `options` parameter
///
/// # Errors
/// Returns `PuzzleError::Json` if serialisation fails.
pub fn encode(puzzle: &Puzzle) -> Result<String, PuzzleError> {
    PuzzleOptions::from(puzzle).encode()
}

fn expect_len(what: &'static str, expected: usize, actual: usize) -> Result<(), PuzzleError> {
    if expected == actual {
        Ok(())
    } else {
        Err(PuzzleError::Shape {
            what,
            expected,
            actual,
        })
    }
}

/// Pull the parameter out of a link, a query string, or a bare value
///
/// Query values are form-decoded, which turns a literal `+` into a space;
/// base64 never contains spaces, so they are mapped back.
fn extract_param(input: &str) -> Result<String, PuzzleError> {
    let input = input.trim();

    if let Ok(link) = Url::parse(input) {
        return options_value(link.query_pairs()).ok_or(PuzzleError::MissingOptions);
    }

    let query = input.split_once('?').map_or(input, |(_, query)| query);
    let query = query.split_once('#').map_or(query, |(query, _)| query);
    let keyed = form_urlencoded::parse(query.as_bytes()).any(|(key, _)| key == OPTIONS_KEY);

    let query = if keyed {
        query.to_string()
    } else {
        format!("{OPTIONS_KEY}={query}")
    };
    options_value(form_urlencoded::parse(query.as_bytes())).ok_or(PuzzleError::MissingOptions)
}

fn options_value(mut pairs: form_urlencoded::Parse<'_>) -> Option<String> {
    pairs
        .find(|(key, _)| key == OPTIONS_KEY)
        .map(|(_, value)| value.replace(' ', "+"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> PuzzleOptions {
        PuzzleOptions {
            words: vec![
                vec!["MALL".into(), "MARKET".into(), "OUTLET".into(), "STORE".into()],
                vec!["SHAVE".into(), "THREAD".into(), "TWEEZE".into(), "WAX".into()],
                vec!["CUT".into(), "PIECE".into(), "SHARE".into(), "TAKE".into()],
                vec!["ALLEN".into(), "CRESCENT".into(), "MONKEY".into(), "SOCKET".into()],
            ],
            names: vec![
                "PLACES TO SHOP".into(),
                "WAYS TO REMOVE HAIR".into(),
                "PORTION OF PROFIT".into(),
                "KINDS OF WRENCHES".into(),
            ],
            author: "New York Times".into(),
            title: "Connections #173".into(),
        }
    }

    #[test]
    fn decode_reads_encoded_options() {
        let encoded = options().encode().unwrap();
        let decoded = PuzzleOptions::decode(&encoded).unwrap();
        assert_eq!(decoded, options());
    }

    #[test]
    fn decode_reads_link() {
        let encoded = options().encode().unwrap().replace('+', "%2B").replace('=', "%3D");
        let link = format!("https://example.com/play?options={encoded}&ref=share");
        let puzzle = decode(&link).unwrap();
        assert_eq!(puzzle.title(), "Connections #173");
    }

    #[test]
    fn decode_ignores_similar_keys() {
        let encoded = options().encode().unwrap();
        let link = format!("https://example.com/play?myoptions=zzz&xoptions=yyy&options={encoded}");
        let puzzle = decode(&link).unwrap();
        assert_eq!(puzzle.title(), "Connections #173");
    }

    #[test]
    fn decode_fully_escaped_link() {
        let encoded = options().encode().unwrap();
        let escaped: String = form_urlencoded::byte_serialize(encoded.as_bytes()).collect();
        assert!(!escaped.contains('='));

        let link = format!("https://example.com/play?options={escaped}#top");
        assert_eq!(decode(&link).unwrap().title(), "Connections #173");

        let relative = format!("/play?ref=share&options={escaped}");
        assert_eq!(decode(&relative).unwrap().title(), "Connections #173");
    }

    #[test]
    fn decode_keeps_literal_plus() {
        let encoded = options().encode().unwrap();
        let link = format!("https://example.com/play?options={encoded}");
        assert_eq!(PuzzleOptions::decode(&link).unwrap(), options());
        assert_eq!(PuzzleOptions::decode(&format!("options={encoded}")).unwrap(), options());
    }

    #[test]
    fn decode_link_without_options() {
        assert!(matches!(
            PuzzleOptions::decode("https://example.com/play?xoptions=abc"),
            Err(PuzzleError::MissingOptions)
        ));
    }

    #[test]
    fn decode_known_parameter() {
        let json = r#"{"words":[["a","b","c","d"],["e","f","g","h"],["i","j","k","l"],["m","n","o","p"]],"names":["1","2","3","4"],"author":"","title":"t"}"#;
        let param = STANDARD.encode(json);
        let puzzle = decode(&param).unwrap();
        assert_eq!(puzzle.categories()[3].words()[0].text(), "M");
        assert_eq!(puzzle.categories()[1].name(), "2");
    }

    #[test]
    fn decode_missing_author_and_title() {
        let json = r#"{"words":[["a","b","c","d"],["e","f","g","h"],["i","j","k","l"],["m","n","o","p"]],"names":["1","2","3","4"]}"#;
        let puzzle = decode(&STANDARD.encode(json)).unwrap();
        assert_eq!(puzzle.title(), "");
        assert_eq!(puzzle.author(), "");
    }

    #[test]
    fn decode_rejects_bad_base64() {
        assert!(matches!(
            PuzzleOptions::decode("not base64 !!"),
            Err(PuzzleError::Base64(_))
        ));
    }

    #[test]
    fn decode_rejects_bad_json() {
        let param = STANDARD.encode("{\"words\": 3}");
        assert!(matches!(
            PuzzleOptions::decode(&param),
            Err(PuzzleError::Json(_))
        ));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let mut opts = options();
        opts.words[2].pop();
        let param = opts.encode().unwrap();

        assert!(matches!(
            PuzzleOptions::decode(&param),
            Err(PuzzleError::Shape {
                what: "words per category",
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn decode_rejects_three_categories() {
        let mut opts = options();
        opts.words.pop();
        opts.names.pop();
        assert!(matches!(
            PuzzleOptions::decode(&opts.encode().unwrap()),
            Err(PuzzleError::Shape { .. })
        ));
    }

    #[test]
    fn to_puzzle_rejects_duplicates() {
        let mut opts = options();
        opts.words[3][0] = "wax".into();
        assert!(matches!(
            opts.to_puzzle(),
            Err(PuzzleError::DuplicateWord { .. })
        ));
    }

    #[test]
    fn to_puzzle_rejects_empty_word() {
        let mut opts = options();
        opts.words[1][2] = "  ".into();
        assert!(matches!(
            opts.to_puzzle(),
            Err(PuzzleError::MissingWord { category: 2 })
        ));
    }

    #[test]
    fn validate_complete_requires_words_and_names() {
        assert!(options().validate_complete().is_ok());

        let mut missing_word = options();
        missing_word.words[0][0] = String::new();
        assert!(matches!(
            missing_word.validate_complete(),
            Err(PuzzleError::MissingWord { category: 1 })
        ));

        let mut missing_name = options();
        missing_name.names[3] = " ".into();
        assert!(matches!(
            missing_name.validate_complete(),
            Err(PuzzleError::MissingName { category: 4 })
        ));

        let mut no_title = options();
        no_title.title = String::new();
        no_title.author = String::new();
        assert!(no_title.validate_complete().is_ok());
    }

    #[test]
    fn puzzle_converts_back_to_options() {
        let puzzle = options().to_puzzle().unwrap();
        assert_eq!(PuzzleOptions::from(&puzzle), options());
        assert_eq!(decode(&encode(&puzzle).unwrap()).unwrap().title(), puzzle.title());
    }
}
