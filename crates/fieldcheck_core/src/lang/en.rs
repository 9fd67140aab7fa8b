//! Built-in English tables.

pub(super) const ERRORS: &[(&str, &str)] = &[
    ("required", "The {attribute} field is required."),
    ("filled", "The {attribute} field must have a value when present."),
    ("present", "The {attribute} field must be present."),
    ("prohibited", "The {attribute} field is prohibited."),
    ("string", "The {attribute} field must be a string."),
    ("numeric", "The {attribute} field must be a number."),
    ("integer", "The {attribute} field must be an integer."),
    ("boolean", "The {attribute} field must be true or false."),
    ("array", "The {attribute} field must be an array."),
    ("json", "The {attribute} field must be a valid JSON string."),
    ("email", "The {attribute} field must be a valid email address."),
    ("url", "The {attribute} field must be a valid URL."),
    (
        "active_url",
        "The {attribute} field must be a URL with a resolvable host.",
    ),
    ("ip", "The {attribute} field must be a valid IP address."),
    ("ipv4", "The {attribute} field must be a valid IPv4 address."),
    ("ipv6", "The {attribute} field must be a valid IPv6 address."),
    ("uuid", "The {attribute} field must be a valid UUID."),
    ("alpha", "The {attribute} field must only contain letters."),
    (
        "alpha_dash",
        "The {attribute} field must only contain letters, numbers, dashes and underscores.",
    ),
    (
        "alpha_num",
        "The {attribute} field must only contain letters and numbers.",
    ),
    ("regex", "The {attribute} field format is invalid."),
    ("not_regex", "The {attribute} field matches a forbidden format."),
    ("date", "The {attribute} field must be a valid date."),
    ("date_format", "The {attribute} field must match the format {format}."),
    ("timezone", "The {attribute} field must be a valid timezone."),
    (
        "starts_with",
        "The {attribute} field must start with one of the following: {values}.",
    ),
    (
        "ends_with",
        "The {attribute} field must end with one of the following: {values}.",
    ),
    ("mimes", "The {attribute} field must be a file of type: {values}."),
    ("image", "The {attribute} field must be an image."),
    (
        "dimensions",
        "The {attribute} field must be between {min_width}x{min_height} and {max_width}x{max_height} pixels.",
    ),
    ("before", "The {attribute} field must be a date before {date}."),
    ("after", "The {attribute} field must be a date after {date}."),
    (
        "before_or_equal",
        "The {attribute} field must be a date before or equal to {date}.",
    ),
    (
        "after_or_equal",
        "The {attribute} field must be a date after or equal to {date}.",
    ),
    ("date_equals", "The {attribute} field must be a date equal to {date}."),
    ("max_numeric", "The {attribute} field must not be greater than {max}."),
    ("min_numeric", "The {attribute} field must be at least {min}."),
    (
        "max_string",
        "The {attribute} field must not be greater than {max} characters.",
    ),
    ("min_string", "The {attribute} field must be at least {min} characters."),
    ("digits", "The {attribute} field must be {digits} digits."),
    (
        "digits_between",
        "The {attribute} field must be between {min} and {max} digits.",
    ),
    ("in", "The selected {attribute} is invalid."),
    ("not_in", "The selected {attribute} is not allowed."),
    (
        "in_array",
        "Every item of the {attribute} field must be one of: {values}.",
    ),
    ("exists", "The selected {attribute} does not exist."),
    (
        "exists_in_string",
        "The {attribute} field must appear in one of: {values}.",
    ),
    ("unique", "The {attribute} has already been taken."),
    ("distinct", "The {attribute} field has a duplicate value."),
    ("confirmed", "The {attribute} field confirmation does not match."),
    ("same", "The {attribute} field must match {other}."),
    ("different", "The {attribute} field and {other} must be different."),
    (
        "accepted_if",
        "The {attribute} field must be accepted when {other} is {value}.",
    ),
    (
        "declined_if",
        "The {attribute} field must be declined when {other} is {value}.",
    ),
    (
        "required_if",
        "The {attribute} field is required when {other} is {value}.",
    ),
    (
        "required_unless",
        "The {attribute} field is required unless {other} is in {values}.",
    ),
    (
        "prohibited_if",
        "The {attribute} field is prohibited when {other} is {value}.",
    ),
    ("accepted", "The {attribute} field must be accepted."),
    ("declined", "The {attribute} field must be declined."),
    (
        "password_letters",
        "The {attribute} field must contain at least one letter.",
    ),
    (
        "password_mixed",
        "The {attribute} field must contain at least one uppercase and one lowercase letter.",
    ),
    (
        "password_numbers",
        "The {attribute} field must contain at least one number.",
    ),
    (
        "password_symbols",
        "The {attribute} field must contain at least one symbol.",
    ),
    (
        "password_uncompromised",
        "The given {attribute} has appeared in a data leak. Please choose a different {attribute}.",
    ),
    (
        "type_mismatch",
        "The {attribute} field must be a {expected} value for the {rule} rule.",
    ),
    (
        "missing_reference",
        "The {attribute} field depends on {other}, which was not provided.",
    ),
];

pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("validation_passed", "Validation passed"),
    ("validation_failed", "Validation failed"),
    ("errors", "Errors"),
    ("summary", "Summary"),
    ("total_errors", "Total errors"),
    ("attributes.password_confirmation", "password confirmation"),
    ("attributes.email", "email address"),
    ("types.numeric", "numeric"),
    ("types.string", "string"),
    ("types.date", "date"),
    ("types.array", "array"),
    ("types.scalar", "single"),
    ("types.dimensions", "width and height"),
];

pub(super) const INFO: &[(&str, &str)] = &[
    ("report_title", "VALIDATION REPORT"),
    ("coverage_title", "TRANSLATION COVERAGE"),
    ("config_loaded", "Configuration loaded from {path}"),
    ("overlay_loaded", "Catalog overlay for '{language}' loaded from {path}"),
    ("coverage_complete", "All {section} keys are translated for '{language}'"),
    ("coverage_missing", "{count} {section} key(s) missing for '{language}'"),
];
