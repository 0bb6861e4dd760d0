//! Token categories produced by lexers.
//!
//! Codes follow the Pygments hierarchy: the thousands digit selects a
//! category (`Keyword`, `Name`, ...), the hundreds digit a sub-category
//! (`LiteralString`, `LiteralNumber`), and the remaining digits the exact
//! type. Negative codes are meta types describing parts of the rendered
//! document rather than lexical units.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

macro_rules! token_types {
    ($($variant:ident = $code:expr,)*) => {
        /// A token category.
        ///
        /// The variant name doubles as the stable textual name used by the
        /// XML and YAML formats.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum TokenType {
            $($variant = $code,)*
        }

        impl TokenType {
            /// Every token type, in declaration order.
            pub const ALL: &'static [TokenType] = &[$(TokenType::$variant,)*];

            /// The stable name of this token type.
            pub fn name(self) -> &'static str {
                match self {
                    $(TokenType::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

token_types! {
    // Meta types.
    None = -13,
    Other = -12,
    Error = -11,
    CodeLine = -10,
    LineLink = -9,
    LineTableTD = -8,
    LineTable = -7,
    LineHighlight = -6,
    LineNumbersTable = -5,
    LineNumbers = -4,
    Line = -3,
    PreWrapper = -2,
    Background = -1,
    EOFType = 0,

    Keyword = 1000,
    KeywordConstant = 1001,
    KeywordDeclaration = 1002,
    KeywordNamespace = 1003,
    KeywordPseudo = 1004,
    KeywordReserved = 1005,
    KeywordType = 1006,

    Name = 2000,
    NameAttribute = 2001,
    NameBuiltin = 2002,
    NameBuiltinPseudo = 2003,
    NameClass = 2004,
    NameConstant = 2005,
    NameDecorator = 2006,
    NameEntity = 2007,
    NameException = 2008,
    NameFunction = 2009,
    NameFunctionMagic = 2010,
    NameKeyword = 2011,
    NameLabel = 2012,
    NameNamespace = 2013,
    NameOperator = 2014,
    NameOther = 2015,
    NamePseudo = 2016,
    NameProperty = 2017,
    NameTag = 2018,
    NameVariable = 2019,
    NameVariableAnonymous = 2020,
    NameVariableClass = 2021,
    NameVariableGlobal = 2022,
    NameVariableInstance = 2023,
    NameVariableMagic = 2024,

    Literal = 3000,
    LiteralDate = 3001,
    LiteralOther = 3002,

    LiteralString = 3100,
    LiteralStringAffix = 3101,
    LiteralStringAtom = 3102,
    LiteralStringBacktick = 3103,
    LiteralStringBoolean = 3104,
    LiteralStringChar = 3105,
    LiteralStringDelimiter = 3106,
    LiteralStringDoc = 3107,
    LiteralStringDouble = 3108,
    LiteralStringEscape = 3109,
    LiteralStringHeredoc = 3110,
    LiteralStringInterpol = 3111,
    LiteralStringName = 3112,
    LiteralStringOther = 3113,
    LiteralStringRegex = 3114,
    LiteralStringSingle = 3115,
    LiteralStringSymbol = 3116,

    LiteralNumber = 3200,
    LiteralNumberBin = 3201,
    LiteralNumberFloat = 3202,
    LiteralNumberHex = 3203,
    LiteralNumberInteger = 3204,
    LiteralNumberIntegerLong = 3205,
    LiteralNumberOct = 3206,
    LiteralNumberByte = 3207,

    Operator = 4000,
    OperatorWord = 4001,

    Punctuation = 5000,

    Comment = 6000,
    CommentHashbang = 6001,
    CommentMultiline = 6002,
    CommentPreproc = 6003,
    CommentPreprocFile = 6004,
    CommentSingle = 6005,
    CommentSpecial = 6006,

    Generic = 7000,
    GenericDeleted = 7001,
    GenericEmph = 7002,
    GenericError = 7003,
    GenericHeading = 7004,
    GenericInserted = 7005,
    GenericOutput = 7006,
    GenericPrompt = 7007,
    GenericStrong = 7008,
    GenericSubheading = 7009,
    GenericTraceback = 7010,
    GenericUnderline = 7011,

    Text = 8000,
    TextWhitespace = 8001,
    TextSymbol = 8002,
    TextPunctuation = 8003,
}

static BY_CODE: Lazy<HashMap<i32, TokenType>> =
    Lazy::new(|| TokenType::ALL.iter().map(|t| (t.code(), *t)).collect());

static BY_NAME: Lazy<HashMap<&'static str, TokenType>> =
    Lazy::new(|| TokenType::ALL.iter().map(|t| (t.name(), *t)).collect());

impl TokenType {
    /// The numeric code of this token type.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Looks up a token type by numeric code.
    pub fn from_code(code: i32) -> Option<TokenType> {
        BY_CODE.get(&code).copied()
    }

    /// Looks up a token type by its stable name, e.g. `"CommentSingle"`.
    pub fn from_name(name: &str) -> Option<TokenType> {
        BY_NAME.get(name).copied()
    }

    /// The broad category, e.g. `Comment` for `CommentSingle`.
    ///
    /// Meta types project to [`TokenType::EOFType`].
    pub fn category(self) -> TokenType {
        Self::from_code(self.code() / 1000 * 1000).unwrap_or(TokenType::EOFType)
    }

    /// The sub-category, e.g. `LiteralString` for `LiteralStringDouble`.
    ///
    /// Types without a sub-category project to their category.
    pub fn sub_category(self) -> TokenType {
        Self::from_code(self.code() / 100 * 100).unwrap_or_else(|| self.category())
    }

    /// Returns true if this token type is in `category`.
    pub fn in_category(self, category: TokenType) -> bool {
        self.category() == category
    }
}

impl PartialOrd for TokenType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TokenType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.code().cmp(&other.code())
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TokenType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        TokenType::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown token type {:?}", name)))
    }
}
