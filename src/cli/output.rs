//! Rendering of GPU records as text
//!
//! Two modes: detail (single record, full fields) and brief (used when
//! rendering a collection; driver version is intentionally omitted).
//! Colors come from an injected [`Palette`] rather than process-wide
//! state, so tests can render without escape codes.

use crate::domain::GpuRecord;

const HEADER_RULE_WIDTH: usize = 50;

/// ANSI escape codes used by the renderers.
///
/// [`Palette::plain`] yields empty codes for tests and dumb terminals.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub reset: &'static str,
    pub bold: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub dim: &'static str,
}

impl Palette {
    /// Standard ANSI colors
    pub const fn ansi() -> Self {
        Self {
            reset: "\x1b[0m",
            bold: "\x1b[1m",
            cyan: "\x1b[36m",
            green: "\x1b[32m",
            yellow: "\x1b[33m",
            dim: "\x1b[2m",
        }
    }

    /// No escape codes
    pub const fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            cyan: "",
            green: "",
            yellow: "",
            dim: "",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}

fn section_header(text: &str, colors: &Palette) -> String {
    format!(
        "\n{}{}{}{}\n{}\n",
        colors.bold,
        colors.cyan,
        text,
        colors.reset,
        "=".repeat(HEADER_RULE_WIDTH)
    )
}

fn field(key: &str, value: &str, colors: &Palette) -> String {
    format!("  {}{}: {}{}\n", colors.green, key, colors.reset, value)
}

/// Render one record in detail mode.
///
/// Driver version and PCI id are shown only when set and not the
/// `"N/A"` marker.
pub fn format_detail(gpu: &GpuRecord, colors: &Palette) -> String {
    let title = if gpu.is_active {
        format!("GPU {} (Active)", gpu.index)
    } else {
        format!("GPU {}", gpu.index)
    };

    let mut out = section_header(&title, colors);
    out.push_str(&field("Name", &gpu.name, colors));
    out.push_str(&field("Vendor", &gpu.vendor, colors));
    if gpu.has_driver_version() {
        if let Some(version) = &gpu.driver_version {
            out.push_str(&field("Driver Version", version, colors));
        }
    }
    if gpu.has_pci_id() {
        if let Some(pci_id) = &gpu.pci_id {
            out.push_str(&field("PCI ID", pci_id, colors));
        }
    }

    out
}

/// Render one record in brief mode.
///
/// Driver version never appears here; the PCI id is shown whenever set,
/// without the `"N/A"` filter detail mode applies.
pub fn format_brief(gpu: &GpuRecord, colors: &Palette) -> String {
    let mut out = format!("{}GPU {}{}", colors.bold, gpu.index, colors.reset);
    if gpu.is_active {
        out.push_str(&format!(" {}(Active){}", colors.green, colors.reset));
    }
    out.push('\n');
    out.push_str(&field("Name", &gpu.name, colors));
    out.push_str(&field("Vendor", &gpu.vendor, colors));
    if let Some(pci_id) = &gpu.pci_id {
        out.push_str(&field("PCI ID", pci_id, colors));
    }

    out
}

/// Render the full collection: count header, each record in brief mode,
/// one blank line between records and none after the last.
pub fn format_collection(gpus: &[GpuRecord], colors: &Palette) -> String {
    if gpus.is_empty() {
        return format!("{}No GPUs detected.{}\n", colors.yellow, colors.reset);
    }

    let mut out = section_header(&format!("All GPUs ({} detected)", gpus.len()), colors);
    for (i, gpu) in gpus.iter().enumerate() {
        out.push_str(&format_brief(gpu, colors));
        if i + 1 < gpus.len() {
            out.push('\n');
        }
    }

    out
}

/// Usage text
pub fn format_help(colors: &Palette) -> String {
    format!(
        "{}GPU Plugin for whatsmycli{}\n\n\
         Usage:\n\
         \x20 whatsmy gpu           {}# Show active/default GPU{}\n\
         \x20 whatsmy gpu all       {}# Show all GPUs{}\n\
         \x20 whatsmy gpu <index>   {}# Show specific GPU by index{}\n\
         \x20 whatsmy gpu help      {}# Show this help{}\n",
        colors.bold,
        colors.reset,
        colors.dim,
        colors.reset,
        colors.dim,
        colors.reset,
        colors.dim,
        colors.reset,
        colors.dim,
        colors.reset,
    )
}
