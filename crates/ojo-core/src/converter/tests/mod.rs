mod basic;
mod props;

use super::testutil::{fixture_converter, quiet_options};

/// Convert with promotion off and every random draw answering 0.
pub(super) fn convert_quiet(text: &str) -> String {
    let (options, mut rng) = quiet_options();
    fixture_converter()
        .convert_with_rng(text, &options, &mut rng)
        .unwrap()
}
