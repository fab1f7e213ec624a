use crate::ast::Op;

/// The fixed field vocabulary of the query language.
///
/// Each field belongs to one of two operator classes: categorical fields
/// accept `==` and `!=` only, numeric fields accept all six comparison
/// operators. The class is part of the grammar, so an ordering applied to a
/// categorical field (`governor > 5`) fails at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// State name; `state == vermont` prints the full profile
    State,
    /// Census region (Northeast, Southeast, Midwest, Southwest, West)
    Region,
    /// State capital city
    Capital,
    /// Sitting governor's name
    Governor,
    /// Resident population (numeric)
    Population,
    /// Number of counties or county-equivalents (numeric)
    NumCounties,
    /// Signature dish, present on some records only
    PopularFood,
    /// Official state bird, present on some records only
    StateBird,
}

impl Field {
    /// All fields, in help-screen order.
    pub const ALL: [Field; 8] = [
        Field::State,
        Field::Region,
        Field::Capital,
        Field::Governor,
        Field::Population,
        Field::NumCounties,
        Field::PopularFood,
        Field::StateBird,
    ];

    /// The keyword as it is typed in a query, which is also the record's
    /// attribute name in the store.
    pub fn keyword(&self) -> &'static str {
        match self {
            Field::State => "state",
            Field::Region => "region",
            Field::Capital => "capital",
            Field::Governor => "governor",
            Field::Population => "population",
            Field::NumCounties => "num_counties",
            Field::PopularFood => "popular_food",
            Field::StateBird => "state_bird",
        }
    }

    /// Look a field up by its query keyword.
    pub fn from_keyword(word: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.keyword() == word)
    }

    /// Numeric fields take integer literals and the full operator set.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Population | Field::NumCounties)
    }

    /// Whether `op` is grammatical on this field.
    pub fn allows(&self, op: Op) -> bool {
        self.is_numeric() || op.is_categorical()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_keyword(field.keyword()), Some(field));
        }
        assert_eq!(Field::from_keyword("president"), None);
    }

    #[test]
    fn operator_classes() {
        assert!(Field::Population.allows(Op::Gt));
        assert!(Field::Governor.allows(Op::Ne));
        assert!(!Field::Governor.allows(Op::Gt));
        assert!(!Field::StateBird.allows(Op::Le));
    }
}
