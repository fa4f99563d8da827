//! The chemical inventory record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cas;
use crate::dates;
use crate::status::Status;

/// One chemical inventory entry as returned by the backend.
///
/// Field names mirror the backend JSON. Dates are kept as the raw strings
/// the backend sent, with parsing deferred to [`purchased_on`] and
/// [`expires_on`], so an untouched record serializes back unchanged.
///
/// [`purchased_on`]: ChemicalRecord::purchased_on
/// [`expires_on`]: ChemicalRecord::expires_on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalRecord {
    /// Backend-assigned identifier, unique within one fetch.
    #[serde(default)]
    pub id: String,

    /// Chemical name, used for search and alphabetical sort.
    #[serde(default)]
    pub name: String,

    /// CAS registry number, stored as digits.
    #[serde(rename = "CAS", default, skip_serializing_if = "Option::is_none")]
    pub cas: Option<String>,

    /// Purchase date string; may be absent or invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,

    /// Expiration date string; may be absent or invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// Owning institution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,

    /// Free-text room location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    /// Free-text cabinet location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabinet: Option<String>,

    /// Free-text shelf location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf: Option<String>,

    /// Stock status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Free-text quantity description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl ChemicalRecord {
    /// Creates a record with the two required fields; everything else
    /// starts absent.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cas: None,
            purchase_date: None,
            expiration_date: None,
            school: None,
            room: None,
            cabinet: None,
            shelf: None,
            status: None,
            quantity: None,
        }
    }

    /// Sets the CAS number.
    pub fn with_cas(mut self, cas: impl Into<String>) -> Self {
        self.cas = Some(cas.into());
        self
    }

    /// Sets the purchase date string.
    pub fn with_purchase_date(mut self, date: impl Into<String>) -> Self {
        self.purchase_date = Some(date.into());
        self
    }

    /// Sets the expiration date string.
    pub fn with_expiration_date(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    /// Sets the owning school.
    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    /// Sets the room location field.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Sets the cabinet location field.
    pub fn with_cabinet(mut self, cabinet: impl Into<String>) -> Self {
        self.cabinet = Some(cabinet.into());
        self
    }

    /// Sets the shelf location field.
    pub fn with_shelf(mut self, shelf: impl Into<String>) -> Self {
        self.shelf = Some(shelf.into());
        self
    }

    /// Sets the stock status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the quantity description.
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// The purchase date, when present and parsable.
    pub fn purchased_on(&self) -> Option<NaiveDate> {
        self.purchase_date.as_deref().and_then(dates::parse_date)
    }

    /// The expiration date, when present and parsable.
    pub fn expires_on(&self) -> Option<NaiveDate> {
        self.expiration_date.as_deref().and_then(dates::parse_date)
    }

    /// The combined room/cabinet/shelf location, skipping absent parts.
    ///
    /// Returns `None` when no location field is set.
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [
            self.room.as_deref(),
            self.cabinet.as_deref(),
            self.shelf.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// The CAS number in display form (`67-64-1`), when present and long
    /// enough to be one.
    pub fn formatted_cas(&self) -> Option<String> {
        self.cas.as_deref().and_then(cas::format_cas)
    }
}
