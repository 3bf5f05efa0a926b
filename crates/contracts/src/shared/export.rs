use serde::{Deserialize, Serialize};

/// Server-side report formats offered by every list's export endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    /// Last path segment of `{collection}/export/{segment}`
    pub fn path_segment(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }
}
