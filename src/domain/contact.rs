//! Site owner contact details shown beside the form.
//!
//! Every detail is optional; the info panel lists only the ones configured.

/// Ways to reach the site owner other than the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    /// Address offered when sending fails.
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Availability note, e.g. "Available for opportunities".
    pub availability: Option<String>,
    /// GitHub profile URL.
    pub github: Option<String>,
    /// LinkedIn profile URL.
    pub linkedin: Option<String>,
}

impl ContactDetails {
    /// Configured details as `(label, value)` pairs in display order.
    ///
    /// ```
    /// use zcontact::domain::ContactDetails;
    ///
    /// let details = ContactDetails {
    ///     email: Some("me@example.com".to_string()),
    ///     location: Some("Lisbon".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(details.entries(), vec![("Location", "Lisbon"), ("Email", "me@example.com")]);
    /// ```
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Location", &self.location),
            ("Availability", &self.availability),
            ("Phone", &self.phone),
            ("Email", &self.email),
            ("GitHub", &self.github),
            ("LinkedIn", &self.linkedin),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_details_no_entries() {
        assert!(ContactDetails::default().entries().is_empty());
    }

    #[test]
    fn entries_keep_display_order() {
        let details = ContactDetails {
            email: Some("me@example.com".to_string()),
            phone: Some("+1 555 0100".to_string()),
            location: Some("Lisbon".to_string()),
            availability: Some("Available for opportunities".to_string()),
            github: Some("https://github.com/me".to_string()),
            linkedin: Some("https://www.linkedin.com/in/me".to_string()),
        };
        let labels: Vec<&str> = details.entries().into_iter().map(|(label, _)| label).collect();
        assert_eq!(labels, ["Location", "Availability", "Phone", "Email", "GitHub", "LinkedIn"]);
    }
}
