// src/gui/pages/attendance.rs
use crate::config::options::PageKind::{ self, * };
use super::Page;

/// Glance, average missed votes, least and most engaged.
pub struct AttendancePage;
pub static PAGE: AttendancePage = AttendancePage;

impl Page for AttendancePage {
    fn kind(&self) -> PageKind { Attendance }
    fn label(&self) -> &'static str { "Attendance" }
}
