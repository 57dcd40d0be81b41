// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::diagnostic::Diagnostic;
use crate::fragment::Fragment;
use crate::value::Type;

/// The requested partition transform kind is not supported
pub fn unknown_transform(kind: &str) -> Diagnostic {
	Diagnostic {
		code: "TRANSFORM_001".to_string(),
		message: format!("unknown partition transform `{}`", kind),
		fragment: Fragment::owned(kind),
		label: Some("unsupported transform".to_string()),
		help: Some(
			"supported transforms are identity, year, month, day, hour, truncate(width) and bucket(count)"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// The transform cannot be applied to the source column's type
pub fn incompatible_transform(transform: &str, column: &str, source: Type) -> Diagnostic {
	Diagnostic {
		code: "TRANSFORM_002".to_string(),
		message: format!(
			"transform `{}` cannot be applied to column `{}` of type `{}`",
			transform, column, source
		),
		fragment: Fragment::owned(column),
		label: Some(format!("incompatible source type `{}`", source)),
		help: Some("check the transform's source type requirements".to_string()),
		notes: vec![
			"year, month and day require a date or datetime source".to_string(),
			"hour requires a datetime source".to_string(),
			"truncate requires an orderable source, bucket a hashable one".to_string(),
		],
		cause: None,
	}
}

/// A parameterized transform was requested without its parameter
pub fn missing_transform_parameter(kind: &str) -> Diagnostic {
	Diagnostic {
		code: "TRANSFORM_003".to_string(),
		message: format!("transform `{}` requires a parameter", kind),
		fragment: Fragment::owned(kind),
		label: Some("missing parameter".to_string()),
		help: Some(format!("write `{}(n, column)` with n >= 1", kind)),
		notes: vec![],
		cause: None,
	}
}

/// A parameter was supplied for a transform that takes none
pub fn unexpected_transform_parameter(kind: &str, param: u32) -> Diagnostic {
	Diagnostic {
		code: "TRANSFORM_004".to_string(),
		message: format!("transform `{}` does not take a parameter, got `{}`", kind, param),
		fragment: Fragment::owned(kind),
		label: Some("unexpected parameter".to_string()),
		help: Some(format!("write `{}(column)`", kind)),
		notes: vec![],
		cause: None,
	}
}

/// The transform parameter is outside its valid range
pub fn invalid_transform_parameter(kind: &str, param: u32) -> Diagnostic {
	Diagnostic {
		code: "TRANSFORM_005".to_string(),
		message: format!("parameter `{}` for transform `{}` must be at least 1", param, kind),
		fragment: Fragment::owned(kind),
		label: Some("invalid parameter".to_string()),
		help: Some("truncate widths and bucket counts start at 1".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The void transform is synthesized by spec evolution and never user input
pub fn reserved_transform(kind: &str) -> Diagnostic {
	Diagnostic {
		code: "TRANSFORM_006".to_string(),
		message: format!("transform `{}` cannot be requested directly", kind),
		fragment: Fragment::owned(kind),
		label: Some("reserved transform".to_string()),
		help: Some("void fields are created automatically when a partition field is retired".to_string()),
		notes: vec![],
		cause: None,
	}
}
