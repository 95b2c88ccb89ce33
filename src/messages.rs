//! User-facing messages.
//!
//! Every string a caller can read (refusals, the landing page, notices written
//! into export files) comes from here, in the configured [`Locale`].

use crate::config::Locale;

/// Message catalogue for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    /// Returns the catalogue for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Locale of this catalogue.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Refusal shown instead of the landing page.
    pub fn forbidden_page(&self) -> &'static str {
        match self.locale {
            Locale::Ca => "No tens permisos per accedir a aquesta pàgina.",
            Locale::En => "You do not have permission to access this page.",
        }
    }

    /// Refusal shown instead of a download.
    pub fn forbidden_download(&self) -> &'static str {
        match self.locale {
            Locale::Ca => "No tens permisos per descarregar aquest fitxer.",
            Locale::En => "You do not have permission to download this file.",
        }
    }

    /// Landing page heading.
    pub fn landing_title(&self) -> &'static str {
        match self.locale {
            Locale::Ca => "Gestió de fitxers de dades del formulari",
            Locale::En => "Form data files",
        }
    }

    /// Landing page introduction.
    pub fn landing_intro(&self) -> &'static str {
        match self.locale {
            Locale::Ca => "Aquesta pàgina permet descarregar les dades dels formularis enviats, llegides directament des de la base de dades, en format Excel o CSV.",
            Locale::En => "This page downloads the submitted form data, read directly from the database, as Excel or CSV.",
        }
    }

    /// Label of the spreadsheet download link.
    pub fn link_xlsx(&self) -> &'static str {
        match self.locale {
            Locale::Ca => "Descarregar Excel (.xlsx)",
            Locale::En => "Download Excel (.xlsx)",
        }
    }

    /// Label of the CSV download link.
    pub fn link_csv(&self) -> &'static str {
        match self.locale {
            Locale::Ca => "Descarregar CSV",
            Locale::En => "Download CSV",
        }
    }

    /// Cell written into an otherwise empty spreadsheet.
    pub fn empty_table(&self, table: &str) -> String {
        match self.locale {
            Locale::Ca => format!("No hi ha dades disponibles a la taula {table}."),
            Locale::En => format!("No data available in table {table}."),
        }
    }

    /// Notice appended to a CSV download that failed part way.
    pub fn csv_failed(&self) -> &'static str {
        match self.locale {
            Locale::Ca => "S'ha produït un error en generar el fitxer CSV. Si us plau, revisa els logs del sistema.",
            Locale::En => "An error occurred while generating the CSV file. Please check the system logs.",
        }
    }

    /// Notice appended to a spreadsheet download that failed part way.
    pub fn xlsx_failed(&self) -> &'static str {
        match self.locale {
            Locale::Ca => "S'ha produït un error en generar el fitxer Excel. Si us plau, revisa els logs del sistema.",
            Locale::En => "An error occurred while generating the Excel file. Please check the system logs.",
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
