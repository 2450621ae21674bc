use cosmwasm_std::{Addr, Api};

/// Validates an address supplied as configuration. The empty string stands in
/// for the null address and is rejected before it reaches the api.
/// Returns the failure reason so each contract can wrap it in its own error.
pub fn require_address(api: &dyn Api, field: &str, input: &str) -> Result<Addr, String> {
    if input.trim().is_empty() {
        return Err(format!("{} must not be the null address", field));
    }
    api.addr_validate(input)
        .map_err(|err| format!("invalid {} address {}: {}", field, input, err))
}
