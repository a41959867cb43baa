//! Penn Treebank part-of-speech tagset
//!
//! Tags are a closed set. Models may only assign codes listed here, and the
//! rule table matches on the enum rather than on raw strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

macro_rules! tagset {
    ($($variant:ident => $code:literal, $desc:literal;)+) => {
        /// A part-of-speech tag from the Penn Treebank tagset
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PosTag {
            $(
                #[doc = $desc]
                $variant,
            )+
        }

        impl PosTag {
            /// Every tag in the tagset, in canonical order
            pub const ALL: &'static [PosTag] = &[$(PosTag::$variant),+];

            /// The canonical tag code, e.g. `"WRB"`
            pub fn code(&self) -> &'static str {
                match self {
                    $(PosTag::$variant => $code,)+
                }
            }

            /// Human readable description of the tag
            pub fn description(&self) -> &'static str {
                match self {
                    $(PosTag::$variant => $desc,)+
                }
            }
        }

        impl FromStr for PosTag {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($code => Ok(PosTag::$variant),)+
                    other => Err(Error::UnknownTag(other.to_string())),
                }
            }
        }
    };
}

tagset! {
    Cc => "CC", "Coordinating conjunction";
    Cd => "CD", "Cardinal number";
    Dt => "DT", "Determiner";
    Ex => "EX", "Existential there";
    Fw => "FW", "Foreign word";
    In => "IN", "Preposition or subordinating conjunction";
    Jj => "JJ", "Adjective";
    Jjr => "JJR", "Adjective, comparative";
    Jjs => "JJS", "Adjective, superlative";
    Ls => "LS", "List item marker";
    Md => "MD", "Modal";
    Nn => "NN", "Noun, singular or mass";
    Nns => "NNS", "Noun, plural";
    Nnp => "NNP", "Proper noun, singular";
    Nnps => "NNPS", "Proper noun, plural";
    Pdt => "PDT", "Predeterminer";
    Pos => "POS", "Possessive ending";
    Prp => "PRP", "Personal pronoun";
    PrpS => "PRP$", "Possessive pronoun";
    Rb => "RB", "Adverb";
    Rbr => "RBR", "Adverb, comparative";
    Rbs => "RBS", "Adverb, superlative";
    Rp => "RP", "Particle";
    Sym => "SYM", "Symbol";
    To => "TO", "to";
    Uh => "UH", "Interjection";
    Vb => "VB", "Verb, base form";
    Vbd => "VBD", "Verb, past tense";
    Vbg => "VBG", "Verb, gerund or present participle";
    Vbn => "VBN", "Verb, past participle";
    Vbp => "VBP", "Verb, non-3rd person singular present";
    Vbz => "VBZ", "Verb, 3rd person singular present";
    Wdt => "WDT", "Wh-determiner";
    Wp => "WP", "Wh-pronoun";
    WpS => "WP$", "Possessive wh-pronoun";
    Wrb => "WRB", "Wh-adverb";
    Period => ".", "Sentence-final punctuation";
    Comma => ",", "Comma";
    Colon => ":", "Colon or ellipsis";
    LeftParen => "-LRB-", "Left bracket";
    RightParen => "-RRB-", "Right bracket";
    OpenQuote => "``", "Opening quotation mark";
    CloseQuote => "''", "Closing quotation mark";
    Pound => "#", "Pound sign";
    Dollar => "$", "Dollar sign";
}

impl PosTag {
    /// Tag for a punctuation character, if the tagset has one
    pub fn for_punctuation(ch: char) -> Option<PosTag> {
        match ch {
            '.' | '!' | '?' => Some(PosTag::Period),
            ',' => Some(PosTag::Comma),
            ':' | ';' | '…' => Some(PosTag::Colon),
            '(' | '[' | '{' => Some(PosTag::LeftParen),
            ')' | ']' | '}' => Some(PosTag::RightParen),
            '“' | '‘' => Some(PosTag::OpenQuote),
            '"' | '”' | '’' | '\'' => Some(PosTag::CloseQuote),
            '#' => Some(PosTag::Pound),
            '$' => Some(PosTag::Dollar),
            _ => None,
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for PosTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PosTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
