//! Viewer policy: whose data gets masked

/// Decide whether `subject`'s data must be masked for `viewer`
///
/// Owners see their own data unmasked. When either identity is unknown the
/// data is masked.
///
/// ```
/// use privguard::privacy::should_anonymize;
///
/// assert!(!should_anonymize(Some("user123"), Some("user123")));
/// assert!(should_anonymize(None, Some("user123")));
/// ```
pub fn should_anonymize(subject_user_id: Option<&str>, viewer_user_id: Option<&str>) -> bool {
    match (subject_user_id, viewer_user_id) {
        (Some(subject), Some(viewer)) => subject != viewer,
        _ => true,
    }
}
