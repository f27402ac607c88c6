//! Browser helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules are the only code that reaches into the DOM by element id.
//! Every helper tolerates a missing element, since async responses may land
//! after the page that issued them has been torn down. Native builds compile
//! them as no-ops.

pub mod digit_dom;
pub mod scroll;
