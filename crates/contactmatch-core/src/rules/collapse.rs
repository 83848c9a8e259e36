use crate::domain::mimetype::{DataItem, PHONE};
use crate::domain::phone::{convert_keypad_letters_to_digits, split_wait_segments};
use crate::oracle::{MatchType, PhoneNumberOracle, NANP_COUNTRY_CODE};

/// Decides whether two data values should be shown as a single entry.
///
/// Only phone numbers get fuzzy treatment; every other mimetype collapses on exact
/// equality alone.
pub fn should_collapse<O>(
    oracle: &O,
    mimetype_a: Option<&str>,
    value_a: Option<&str>,
    mimetype_b: Option<&str>,
    value_b: Option<&str>,
) -> bool
where
    O: PhoneNumberOracle + ?Sized,
{
    if mimetype_a != mimetype_b {
        return false;
    }
    if value_a == value_b {
        return true;
    }
    let (Some(value_a), Some(value_b)) = (value_a, value_b) else {
        return false;
    };
    if mimetype_a != Some(PHONE) {
        return false;
    }
    phone_values_equivalent(oracle, value_a, value_b)
}

/// [`should_collapse`] over two data rows.
pub fn should_collapse_items<O>(oracle: &O, a: &DataItem, b: &DataItem) -> bool
where
    O: PhoneNumberOracle + ?Sized,
{
    should_collapse(oracle, a.mimetype(), a.value(), b.mimetype(), b.value())
}

/// Drops every item that collapses with an earlier kept item, preserving order.
pub fn collapse_items<O>(oracle: &O, items: &[DataItem]) -> Vec<DataItem>
where
    O: PhoneNumberOracle + ?Sized,
{
    let mut kept: Vec<DataItem> = Vec::with_capacity(items.len());
    for item in items {
        if !kept
            .iter()
            .any(|existing| should_collapse_items(oracle, existing, item))
        {
            kept.push(item.clone());
        }
    }
    kept
}

/// Compares two phone values segment by segment, splitting on the wait separator.
///
/// Not symmetric: keypad letters are converted on the first value only, and only
/// the first value may supply the country code for an NSN match.
pub fn phone_values_equivalent<O>(oracle: &O, number_a: &str, number_b: &str) -> bool
where
    O: PhoneNumberOracle + ?Sized,
{
    let segments_a = split_wait_segments(number_a);
    let segments_b = split_wait_segments(number_b);
    if segments_a.len() != segments_b.len() {
        return false;
    }

    segments_a
        .iter()
        .zip(&segments_b)
        .all(|(left, right)| segments_equivalent(oracle, left, right))
}

fn segments_equivalent<O>(oracle: &O, left: &str, right: &str) -> bool
where
    O: PhoneNumberOracle + ?Sized,
{
    // Letters on the left are dialed as digits; the lettered form wins for display.
    let left = convert_keypad_letters_to_digits(left);
    if left == right {
        return true;
    }

    match oracle.match_type(&left, right) {
        MatchType::NotANumber | MatchType::NoMatch | MatchType::ShortNsnMatch => false,
        MatchType::ExactMatch => true,
        MatchType::NsnMatch => nsn_tie_break(oracle, &left, right),
    }
}

/// Resolves an NSN match by looking at which side carries an explicit country code.
///
/// For NANP, `+14155551212` matches `4155551212` but not `14155551212`; otherwise the
/// bare and trunk-prefixed forms would both collapse into the international one and
/// the relation would stop being transitive. Only the left side may supply the
/// country code: a bare left segment never collapses into an international right one.
fn nsn_tie_break<O>(oracle: &O, left: &str, right: &str) -> bool
where
    O: PhoneNumberOracle + ?Sized,
{
    match oracle.parse(left) {
        Ok(number) => number.country_code == NANP_COUNTRY_CODE && !right.trim().starts_with('1'),
        Err(_) => oracle.parse(right).is_err(),
    }
}
