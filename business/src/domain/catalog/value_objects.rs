use serde::{Deserialize, Serialize};

/// Column a catalog listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Price,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Price => write!(f, "price"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            _ => Err(format!("Invalid sort field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

/// Active ordering of a catalog view.
///
/// Starts at `(name, asc)`. Requesting the field that is already active
/// flips the direction; requesting another field switches to it ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn request_sort(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// State after `request_sort(field)`, leaving `self` untouched.
    pub fn toggled(mut self, field: SortField) -> Self {
        self.request_sort(field);
        self
    }
}

/// Monetary amount stored as an integer number of cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(i64);

impl Price {
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl std::str::FromStr for Price {
    type Err = String;

    /// Parses `"12"`, `"12.3"` or `"12.34"`. More than two fractional digits is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid price: {}", s);
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() || fraction.len() > 2 {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_start_sorted_by_name_ascending() {
        let state = SortState::default();
        assert_eq!(state, SortState::new(SortField::Name, SortDirection::Asc));
    }

    #[test]
    fn should_flip_direction_when_requesting_active_field() {
        let mut state = SortState::default();
        state.request_sort(SortField::Name);
        assert_eq!(state, SortState::new(SortField::Name, SortDirection::Desc));

        state.request_sort(SortField::Name);
        assert_eq!(state, SortState::new(SortField::Name, SortDirection::Asc));
    }

    #[test]
    fn should_switch_field_ascending_when_requesting_other_field() {
        let mut state = SortState::new(SortField::Name, SortDirection::Desc);
        state.request_sort(SortField::Price);
        assert_eq!(state, SortState::new(SortField::Price, SortDirection::Asc));
    }

    #[test]
    fn should_leave_receiver_untouched_when_toggled() {
        let state = SortState::default();
        let next = state.toggled(SortField::Price);
        assert_eq!(state, SortState::default());
        assert_eq!(next.field, SortField::Price);
    }

    #[test]
    fn should_parse_and_display_sort_values() {
        assert_eq!("price".parse::<SortField>(), Ok(SortField::Price));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("rating".parse::<SortField>().is_err());
        assert!("DESC".parse::<SortDirection>().is_err());
        assert_eq!(SortField::Name.to_string(), "name");
        assert_eq!(SortDirection::Asc.to_string(), "asc");
    }

    #[test]
    fn should_format_price_with_two_decimals() {
        assert_eq!(Price::from_cents(129_999).to_string(), "1299.99");
        assert_eq!(Price::from_cents(1_000).to_string(), "10.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn should_parse_price_strings() {
        assert_eq!("12".parse::<Price>(), Ok(Price::from_cents(1_200)));
        assert_eq!("12.3".parse::<Price>(), Ok(Price::from_cents(1_230)));
        assert_eq!("12.34".parse::<Price>(), Ok(Price::from_cents(1_234)));
        assert!("12.345".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
        assert!(".5".parse::<Price>().is_err());
    }

    fn sort_field() -> impl Strategy<Value = SortField> {
        prop_oneof![Just(SortField::Name), Just(SortField::Price)]
    }

    proptest! {
        #[test]
        fn requesting_same_field_twice_restores_state(
            start in sort_field(),
            desc in any::<bool>(),
            requested in sort_field(),
        ) {
            let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
            let initial = SortState::new(start, direction);
            let once = initial.toggled(requested);

            prop_assert_eq!(once.field, requested);
            if start != requested {
                prop_assert_eq!(once.direction, SortDirection::Asc);
            } else {
                prop_assert_eq!(once.toggled(requested), initial);
            }
        }

        #[test]
        fn price_display_parses_back(cents in -10_000_000i64..10_000_000i64) {
            let price = Price::from_cents(cents);
            prop_assert_eq!(price.to_string().parse::<Price>(), Ok(price));
        }
    }
}
