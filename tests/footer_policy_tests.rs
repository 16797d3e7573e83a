//! Footer policy truth table
//!
//! Which footer pane gets built is a pure function of three flags; the full
//! combination space is pinned down here.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use fixtable::widget::footer::{footer_policy, FooterPolicy};
use test_case::test_case;

#[test_case(false, true,  true,  FooterPolicy::CloneHeader ; "clone header into footer")]
#[test_case(true,  false, true,  FooterPolicy::NativeFooter ; "use the native footer group")]
#[test_case(true,  true,  true,  FooterPolicy::None ; "native group plus clone request cancel out")]
#[test_case(false, false, true,  FooterPolicy::None ; "footer requested but nothing to build it from")]
#[test_case(false, true,  false, FooterPolicy::None ; "footer disabled overrides clone request")]
#[test_case(true,  false, false, FooterPolicy::None ; "footer disabled overrides native group")]
#[test_case(true,  true,  false, FooterPolicy::None ; "footer disabled overrides everything")]
#[test_case(false, false, false, FooterPolicy::None ; "nothing requested")]
fn test_footer_policy(
    has_native_tfoot: bool,
    clone_head_to_foot: bool,
    footer: bool,
    expected: FooterPolicy,
) {
    assert_eq!(
        footer_policy(has_native_tfoot, clone_head_to_foot, footer),
        expected
    );
}
