//! Blacklist censorship primitives.

/// Fixed mask substituted for the censored tail of a contact field.
pub const CONTACT_MASK: &str = "xxxx";

/// Mask a contact value (phone number or instagram handle) for non-admin
/// viewers: the trailing four characters are replaced with [`CONTACT_MASK`];
/// values of four characters or fewer are masked entirely.
///
/// Pure transform over an already-fetched value — storage is never touched.
pub fn mask_contact(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= CONTACT_MASK.len() {
        return CONTACT_MASK.to_owned();
    }
    let kept: String = chars[..chars.len() - CONTACT_MASK.len()].iter().collect();
    format!("{kept}{CONTACT_MASK}")
}
