//! Subject distinguished-name attributes shown to users

/// The subject attributes that make up a certificate's information block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectInfo {
    /// Common Name (CN)
    pub common_name: Option<String>,
    /// Locality (L)
    pub locality: Option<String>,
    /// Organization (O)
    pub organization: Option<String>,
    /// Organizational Unit (OU)
    pub organizational_unit: Option<String>,
}

impl SubjectInfo {
    /// Render CN, L, O and OU one per line, in that order.
    ///
    /// Absent attributes become empty lines so the block always has four
    /// segments.
    #[must_use]
    pub fn information(&self) -> String {
        [
            &self.common_name,
            &self.locality,
            &self.organization,
            &self.organizational_unit,
        ]
        .iter()
        .map(|attr| attr.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_information_order() {
        let subject = SubjectInfo {
            common_name: Some("ACME LTDA:12345678000199".to_string()),
            locality: Some("Sao Paulo".to_string()),
            organization: Some("ICP-Brasil".to_string()),
            organizational_unit: Some("Certificado PJ A1".to_string()),
        };
        assert_eq!(
            subject.information(),
            "ACME LTDA:12345678000199\nSao Paulo\nICP-Brasil\nCertificado PJ A1"
        );
    }

    #[test]
    fn test_information_missing_attributes() {
        let subject = SubjectInfo {
            common_name: Some("ACME".to_string()),
            organization: Some("ICP-Brasil".to_string()),
            ..SubjectInfo::default()
        };
        assert_eq!(subject.information(), "ACME\n\nICP-Brasil\n");
        assert_eq!(SubjectInfo::default().information(), "\n\n\n");
    }
}
