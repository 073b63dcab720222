//! Conformance checker for VAST video ad markup.
//!
//! Validates an ad document against one of two fixed rule profiles (a
//! lenient 2.0 profile and a strict 3.0 profile) and reports every finding of
//! a pass as a Fatal or Advisory diagnostic that names the offending element
//! and its identified ancestors. A separate text rewriter repairs known
//! deprecated constructs before re-validation.
//!
//! ```text
//! parse(xml) → Document → validate(doc, profile) → ValidationResult
//! rewrite(xml) → xml
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use vast_check::Profile;
//!
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <VAST version="3.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
//!   <Ad id="a1">
//!     <InLine>
//!       <AdSystem version="1.0">Acme</AdSystem>
//!       <AdTitle>Spot</AdTitle>
//!       <Impression><![CDATA[https://t.example.com/imp]]></Impression>
//!       <Creatives>
//!         <Creative id="c1">
//!           <Linear>
//!             <Duration>00:00:15</Duration>
//!             <MediaFiles>
//!               <MediaFile delivery="progressive" type="video/mp4" width="854" height="480">
//!                 https://cdn.example.com/spot.mp4
//!               </MediaFile>
//!             </MediaFiles>
//!           </Linear>
//!         </Creative>
//!       </Creatives>
//!     </InLine>
//!   </Ad>
//! </VAST>"#;
//!
//! let result = vast_check::check(xml, Profile::Vast3).expect("well-formed XML");
//! assert!(result.is_conformant());
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | yes     | Builds the `vast-check` command-line binary. |

pub mod enums;
pub mod error;
pub mod escape;
pub mod parse;
pub mod primitives;
pub mod remediate;
pub mod rules;
pub mod sink;
pub mod types;
pub mod validate;

pub use enums::Profile;
pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use escape::escape_url_for_xml;
pub use parse::parse;
pub use remediate::{Remediation, remediate, rewrite};
pub use validate::{ValidateOptions, validate, validate_with};

use serde::{Deserialize, Serialize};

/// Parse `input` and validate it against `profile`.
///
/// # Errors
///
/// Returns the [`ParseError`] if `input` is not well-formed XML. Conformance
/// findings are never errors; they are reported in the [`ValidationResult`].
pub fn check(input: &str, profile: Profile) -> Result<ValidationResult, ParseError> {
    check_with(input, &ValidateOptions::new(profile))
}

/// [`check`] with explicit options.
pub fn check_with(input: &str, options: &ValidateOptions) -> Result<ValidationResult, ParseError> {
    let doc = parse::parse(input)?;
    Ok(validate::validate_with(&doc, options))
}

/// Result of the [`repair`] entry point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Repair {
    /// The rewritten markup and what was changed.
    pub remediation: Remediation,
    /// Validation of the rewritten markup.
    pub result: ValidationResult,
}

/// Rewrite deprecated constructs, then validate the rewritten markup.
///
/// # Errors
///
/// Returns the [`ParseError`] if the rewritten markup is not well-formed.
pub fn repair(input: &str, profile: Profile) -> Result<Repair, ParseError> {
    repair_with(input, &ValidateOptions::new(profile))
}

/// [`repair`] with explicit options.
pub fn repair_with(input: &str, options: &ValidateOptions) -> Result<Repair, ParseError> {
    let remediation = remediate::remediate(input);
    let result = check_with(&remediation.text, options)?;
    Ok(Repair {
        remediation,
        result,
    })
}
