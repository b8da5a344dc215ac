use std::rc::Rc;

use log::{error, info};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::branding::store::StoreError;

pub const DEFAULT_LOGO_URL: &str = "https://res.cloudinary.com/duv3inafo/image/upload/v1758302608/d066c4dc-02a3-4fd7-baf8-3e961c7f4854-removebg-preview_nsb2qs.png";

/// Session-wide branding and contact details.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BrandInfo {
    pub name: String,
    pub phone: String,
    pub phone_call_format: String,
    pub logo_url: String,
    pub email: String,
    pub address: String,
    pub address_city: String,
    /// Messaging handle without the leading '@'. Per-call overrides win over it.
    pub messaging_handle: String,
    pub hero_image: Option<String>,
}

impl Default for BrandInfo {
    fn default() -> Self {
        Self {
            name: "Branding Studio".to_string(),
            phone: String::new(),
            phone_call_format: String::new(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            email: "contact@digiborr.com".to_string(),
            address: "19, Ashoka Rd, Janpath, Connaught Place, New Delhi, Delhi 110001, India".to_string(),
            address_city: "New Delhi".to_string(),
            messaging_handle: "darioharmon".to_string(),
            hero_image: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TollFreeNumber {
    pub international_format: String,
    pub local_format: String,
}

impl BrandInfo {
    pub fn apply_toll_free(&mut self, number: &TollFreeNumber) {
        self.phone = number.local_format.clone();
        self.phone_call_format = number.international_format.clone();
    }
}

pub enum BrandingAction {
    /// Outcome of the phone-number lookup. `Ok(None)` means no record is configured.
    PhoneLookup(Result<Option<TollFreeNumber>, StoreError>),
    Replace(BrandInfo),
}

impl Reducible for BrandInfo {
    type Action = BrandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BrandingAction::PhoneLookup(Ok(Some(number))) => {
                let mut next = (*self).clone();
                next.apply_toll_free(&number);
                Rc::new(next)
            }
            BrandingAction::PhoneLookup(Ok(None)) => {
                info!("No phone number record for this site");
                let mut next = (*self).clone();
                next.apply_toll_free(&TollFreeNumber::default());
                Rc::new(next)
            }
            BrandingAction::PhoneLookup(Err(e)) => {
                error!("Error fetching toll-free number: {}", e);
                self
            }
            BrandingAction::Replace(info) => Rc::new(info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: BrandInfo, action: BrandingAction) -> BrandInfo {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn found_record_is_projected_into_phone_fields() {
        let number = TollFreeNumber {
            international_format: "+1-555".to_string(),
            local_format: "555-0100".to_string(),
        };
        let next = reduce(BrandInfo::default(), BrandingAction::PhoneLookup(Ok(Some(number))));
        assert_eq!(next.phone, "555-0100");
        assert_eq!(next.phone_call_format, "+1-555");
        assert_eq!(next.name, "Branding Studio");
    }

    #[test]
    fn missing_record_clears_phone_fields() {
        let mut state = BrandInfo::default();
        state.phone = "old".to_string();
        state.phone_call_format = "+old".to_string();
        let next = reduce(state, BrandingAction::PhoneLookup(Ok(None)));
        assert_eq!(next.phone, "");
        assert_eq!(next.phone_call_format, "");
    }

    #[test]
    fn failed_lookup_keeps_previous_state() {
        let mut state = BrandInfo::default();
        state.phone = "555-0100".to_string();
        let next = reduce(state.clone(), BrandingAction::PhoneLookup(Err(StoreError::Status(500))));
        assert_eq!(next, state);
    }

    #[test]
    fn replace_swaps_whole_state() {
        let mut replacement = BrandInfo::default();
        replacement.name = "Other".to_string();
        replacement.messaging_handle = String::new();
        let next = reduce(BrandInfo::default(), BrandingAction::Replace(replacement.clone()));
        assert_eq!(next, replacement);
    }
}
