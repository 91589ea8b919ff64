//! Built-in setting definitions
//!
//! These are ordinary definitions: they go through the builder and
//! `SettingsCatalog::register` like any other.

use serde_json::json;

use crate::prelude::*;
use crate::settings::SettingDefinition;

use pos_settings_types::types::Scope::{Default as DefaultScope, Store, User};
use pos_settings_types::types::SettingKind::{Policy, Preference};

/// Every built-in definition, in catalog order
pub fn definitions() -> PsResult<Vec<SettingDefinition>> {
	Ok(vec![
		// Personal
		SettingDefinition::builder("ui.language")
			.label("Language")
			.description("Language of the back office and register screens")
			.kind(Preference)
			.group(SettingGroup::Personal)
			.default("en")
			.allowed_scopes([User, Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("ui.theme")
			.label("Theme")
			.description("Light, dark, or follow the system setting")
			.kind(Preference)
			.group(SettingGroup::Personal)
			.default("system")
			.allowed_scopes([User, DefaultScope])
			.build()?,
		SettingDefinition::builder("ui.date_format")
			.label("Date format")
			.description("How dates are shown in reports and sale history")
			.kind(Preference)
			.group(SettingGroup::Personal)
			.default("YYYY-MM-DD")
			.allowed_scopes([User, Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("notifications.sound")
			.label("Notification sound")
			.description("Play a sound when a notification arrives")
			.kind(Preference)
			.group(SettingGroup::Personal)
			.default(true)
			.allowed_scopes([User, DefaultScope])
			.build()?,
		// Stores
		SettingDefinition::builder("store.currency")
			.label("Currency")
			.description("ISO 4217 code of the currency the store sells in")
			.kind(Policy)
			.group(SettingGroup::StoresGeneral)
			.default("USD")
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("store.timezone")
			.label("Time zone")
			.description("IANA time zone used for opening hours and end-of-day reports")
			.kind(Policy)
			.group(SettingGroup::StoresGeneral)
			.default("UTC")
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("tax.rounding")
			.label("Tax rounding")
			.description("Rounding rule applied to tax amounts on each sale line")
			.kind(Policy)
			.group(SettingGroup::StoresTax)
			.default("half-up")
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("tax.prices_include_tax")
			.label("Prices include tax")
			.description("Shelf prices already contain tax")
			.kind(Policy)
			.group(SettingGroup::StoresTax)
			.default(false)
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		// Sell
		SettingDefinition::builder("sell.park_sales")
			.label("Park sales")
			.description("Allow cashiers to put a sale on hold and resume it later")
			.kind(Policy)
			.group(SettingGroup::SellGeneral)
			.default(true)
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("sell.default_quantity")
			.label("Default quantity")
			.description("Quantity added when a product is scanned")
			.kind(Preference)
			.group(SettingGroup::SellGeneral)
			.default(1_i64)
			.allowed_scopes([User, Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("payments.cash_rounding")
			.label("Cash rounding")
			.description("Round cash totals to the nearest coin (none, 0.05, 0.10)")
			.kind(Policy)
			.group(SettingGroup::SellPayments)
			.default("none")
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("payments.tips_enabled")
			.label("Tips")
			.description("Ask customers for a tip during card payments")
			.kind(Policy)
			.group(SettingGroup::SellPayments)
			.default(false)
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("payments.accepted_methods")
			.label("Accepted payment methods")
			.description("Payment methods offered on the register")
			.kind(Policy)
			.group(SettingGroup::SellPayments)
			.default(json!(["cash", "card"]))
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("receipts.footer")
			.label("Receipt footer")
			.description("Text printed at the bottom of every receipt")
			.kind(Policy)
			.group(SettingGroup::SellReceipts)
			.default("Thank you for your purchase!")
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("receipts.email_by_default")
			.label("Email receipts")
			.description("Offer an emailed receipt instead of a printed one")
			.kind(Preference)
			.group(SettingGroup::SellReceipts)
			.default(false)
			.allowed_scopes([User, Store, DefaultScope])
			.build()?,
		// Inventory and customers
		SettingDefinition::builder("inventory.allow_negative_stock")
			.label("Allow negative stock")
			.description("Let a sale go through when the product is out of stock")
			.kind(Policy)
			.group(SettingGroup::Inventory)
			.default(false)
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("inventory.low_stock_threshold")
			.label("Low stock threshold")
			.description("Warn when on-hand quantity drops to this level")
			.kind(Policy)
			.group(SettingGroup::Inventory)
			.default(5_i64)
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("customers.require_email")
			.label("Require customer email")
			.description("New customer records must have an email address")
			.kind(Policy)
			.group(SettingGroup::Customers)
			.default(false)
			.allowed_scopes([Store, DefaultScope])
			.build()?,
		// Hardware and integrations
		SettingDefinition::builder("hardware.receipt_printer")
			.label("Receipt printer")
			.description("Printer used for receipts on this register")
			.kind(Preference)
			.group(SettingGroup::Hardware)
			.default("auto")
			.allowed_scopes([User, Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("hardware.cash_drawer_kick")
			.label("Open cash drawer")
			.description("Open the cash drawer when a cash sale completes")
			.kind(Preference)
			.group(SettingGroup::Hardware)
			.default(true)
			.allowed_scopes([User, Store, DefaultScope])
			.build()?,
		SettingDefinition::builder("integrations.sync_interval_minutes")
			.label("Sync interval")
			.description("Minutes between syncs with connected accounting apps")
			.kind(Policy)
			.group(SettingGroup::Integrations)
			.default(15_i64)
			.allowed_scopes([Store, DefaultScope])
			.build()?,
	])
}

/// Register all built-in settings
pub fn register_settings(catalog: &mut SettingsCatalog) -> PsResult<()> {
	for def in definitions()? {
		catalog.register(def)?;
	}
	Ok(())
}


// vim: ts=4
