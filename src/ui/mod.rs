// SPDX-License-Identifier: MPL-2.0
//! Interaction controllers for the console UI.

pub mod delete_confirm;
pub mod filter;
pub mod modal;
pub mod notifications;
pub mod overlay;
pub mod panels;
pub mod sidebar;
