//! # Views
//!
//! Page-level views of the Denta patient portal.
//!
//! The routing layer treats views as opaque data, so this enum is all the
//! route table needs: a closed inventory of the portal's pages, each with
//! the title the host would put on the document. Rendering them is the
//! host's job, not this crate's.

/// A renderable page of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Landing page with the clinic presentation.
    Home,
    /// Contact details and the appointment request form.
    Contacts,
    /// Catalogue of offered dental services.
    Services,
    /// The clinic's doctors roster.
    Doctors,
    /// Patient account page.
    Account,
    /// Patient reviews.
    Reviews,
    /// Doctor-facing account page.
    DoctorAccount,
}

impl View {
    /// The document title shown for this page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Denta",
            Self::Contacts => "Contacts",
            Self::Services => "Services",
            Self::Doctors => "Our Doctors",
            Self::Account => "My Account",
            Self::Reviews => "Reviews",
            Self::DoctorAccount => "Doctor Account",
        }
    }
}
