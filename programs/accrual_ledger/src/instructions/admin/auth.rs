use super::*;

/// Capability checks consulted before any supply or rate mutation.
pub trait AccessBoundary {
    /// May `caller` mint or burn ledger units.
    fn may_mutate_supply(&self, caller: &Pubkey) -> bool;

    /// May `caller` change the global rate or the set of supply operators.
    fn may_govern_rate(&self, caller: &Pubkey) -> bool;
}

impl AccessBoundary for Ledger {
    fn may_mutate_supply(&self, caller: &Pubkey) -> bool {
        self.is_supply_operator(caller)
    }

    fn may_govern_rate(&self, caller: &Pubkey) -> bool {
        *caller == self.authority
    }
}

// Helper function to check if user is authorized for LayerZero operations
pub fn is_authorized_lz_admin(user: &Pubkey, ledger: &Ledger, bridge_store: &BridgeStore) -> bool {
    ledger.may_govern_rate(user) || *user == bridge_store.admin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_governs_and_operators_mutate() {
        let authority = Pubkey::new_unique();
        let operator = Pubkey::new_unique();
        let mut ledger = Ledger::new(authority, "ACR", 1, 255).unwrap();

        assert!(ledger.may_govern_rate(&authority));
        assert!(!ledger.may_govern_rate(&operator));
        // the authority does not mint unless it is granted the role
        assert!(!ledger.may_mutate_supply(&authority));

        ledger.grant_supply_role(operator).unwrap();
        assert!(ledger.may_mutate_supply(&operator));
        assert!(!ledger.may_govern_rate(&operator));
    }

    #[test]
    fn bridge_admin_is_an_lz_admin() {
        let authority = Pubkey::new_unique();
        let ledger = Ledger::new(authority, "ACR", 1, 255).unwrap();
        let bridge_admin = Pubkey::new_unique();
        let bridge_store = BridgeStore {
            ledger: Pubkey::new_unique(),
            custody: Pubkey::new_unique(),
            endpoint_program: Pubkey::new_unique(),
            admin: bridge_admin,
            bump: 255,
            total_locked: 0,
            total_released: 0,
        };

        assert!(is_authorized_lz_admin(&authority, &ledger, &bridge_store));
        assert!(is_authorized_lz_admin(&bridge_admin, &ledger, &bridge_store));
        assert!(!is_authorized_lz_admin(&Pubkey::new_unique(), &ledger, &bridge_store));
    }
}
