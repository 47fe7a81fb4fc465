//! Central registry for all user-facing message templates.
//!
//! Naming Convention:
//! - `scan_*` - Directory scan messages
//! - `select_*` / `confirm_*` - Interactive selection and confirmation
//! - `delete_*` - Deletion reporting
//! - `error_*` - Top-level failures
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.

pub struct Messages {
    // ============================================================================
    // Scan Messages
    // ============================================================================
    pub scan_found_header: &'static str,
    pub scan_none_found: &'static str,
    pub scan_started: &'static str,

    // ============================================================================
    // Selection Messages
    // ============================================================================
    pub select_header: &'static str,
    pub select_invalid: &'static str,
    pub select_item: &'static str,
    pub select_prompt: &'static str,

    // ============================================================================
    // Confirmation Messages
    // ============================================================================
    pub confirm_cancelled: &'static str,
    pub confirm_header: &'static str,
    pub confirm_invalid: &'static str,
    pub confirm_item: &'static str,
    pub confirm_prompt: &'static str,

    // ============================================================================
    // Deletion Messages
    // ============================================================================
    pub delete_failed: &'static str,
    pub delete_skipped: &'static str,
    pub delete_started: &'static str,
    pub delete_success: &'static str,
    pub delete_summary: &'static str,

    // ============================================================================
    // Error Messages
    // ============================================================================
    pub error_generic: &'static str,
    pub error_logging_init: &'static str,
}

pub const MESSAGES: Messages = Messages {
    scan_found_header: "Found Python virtual environments:",
    scan_none_found: "No Python virtual environments found.",
    scan_started: "🔍 Scanning '{path}' for Python virtual environments...",

    select_header: "\nSelect the indices of virtual environments to delete (comma-separated), or 'exit' to quit:",
    select_invalid: "Invalid selection, please try again.",
    select_item: "{index}. {path}",
    select_prompt: "Enter selection",

    confirm_cancelled: "No virtual environments were deleted.",
    confirm_header: "\nSelected virtual environments for deletion:",
    confirm_invalid: "Invalid input, please try again.",
    confirm_item: "{path}",
    confirm_prompt: "Type 'delete' to confirm, 'change' to modify selection, or 'exit' to cancel",

    delete_failed: "❌ Failed to delete {path}: {error}",
    delete_skipped: "Skipped (not a real directory): {path}",
    delete_started: "Deleting selected virtual environments...",
    delete_success: "Deleted: {path}",
    delete_summary: "Summary: {deleted} deleted, {skipped} skipped, {failed} failed",

    error_generic: "❌ Error: {error}",
    error_logging_init: "Failed to initialize logging: {error}",
};
