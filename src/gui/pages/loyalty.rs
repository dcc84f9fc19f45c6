// src/gui/pages/loyalty.rs
use crate::config::options::PageKind::{ self, * };
use super::Page;

pub struct LoyaltyPage;
pub static PAGE: LoyaltyPage = LoyaltyPage;

impl Page for LoyaltyPage {
    fn kind(&self) -> PageKind { Loyalty }
    fn label(&self) -> &'static str { "Party Loyalty" }
}
