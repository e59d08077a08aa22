/// Input checks the wizard steps run before data reaches the sequencer

/// Length of the SMS / Telegram verification code
pub const VERIFICATION_CODE_LEN: usize = 4;

/// Whitespace-separated parts of a person's name
pub fn name_parts(value: &str) -> Vec<&str> {
    value.split_whitespace().collect()
}

/// A full name needs at least a first and a last name
pub fn is_valid_full_name(value: &str) -> bool {
    name_parts(value).len() >= 2
}

/// Verification codes are exactly four characters
pub fn is_valid_code(code: &str) -> bool {
    code.chars().count() == VERIFICATION_CODE_LEN
}
