//! Subject name attribute extraction
//!
//! Reads the distinguished-name attributes shown to users from an x509-cert
//! `Name`, handling the ASN.1 string types certificate authorities use,
//! including the BMPString found in some older certificates.

use der::Tagged;
use der::asn1::{
    Any, BmpString, Ia5StringRef, ObjectIdentifier, PrintableStringRef, TeletexStringRef,
    Utf8StringRef,
};
use x509_cert::name::Name;

use crate::error::{InspectionError, Result};
use crate::subject::SubjectInfo;

const OID_CN: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3"); // commonName
const OID_L: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.7"); // localityName
const OID_O: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.10"); // organizationName
const OID_OU: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.11"); // organizationalUnitName

/// Extract CN, L, O and OU from a subject name.
///
/// The first occurrence of each attribute in DN order wins. Attributes
/// outside these four are ignored whatever their encoding.
pub fn extract_subject_info(name: &Name) -> Result<SubjectInfo> {
    let mut subject = SubjectInfo::default();

    // Iterate through RDNs (Relative Distinguished Names)
    for rdn in &name.0 {
        for atv in rdn.0.iter() {
            let slot = if atv.oid == OID_CN {
                &mut subject.common_name
            } else if atv.oid == OID_L {
                &mut subject.locality
            } else if atv.oid == OID_O {
                &mut subject.organization
            } else if atv.oid == OID_OU {
                &mut subject.organizational_unit
            } else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(attribute_string(&atv.oid, &atv.value)?);
            }
        }
    }

    Ok(subject)
}

fn attribute_string(oid: &ObjectIdentifier, value: &Any) -> Result<String> {
    if let Ok(ps) = PrintableStringRef::try_from(value) {
        Ok(ps.to_string())
    } else if let Ok(utf8s) = Utf8StringRef::try_from(value) {
        Ok(utf8s.to_string())
    } else if let Ok(ia5s) = Ia5StringRef::try_from(value) {
        Ok(ia5s.to_string())
    } else if let Ok(t61s) = TeletexStringRef::try_from(value) {
        Ok(t61s.to_string())
    } else if let Ok(bmps) = value.decode_as::<BmpString>() {
        Ok(bmps.to_string())
    } else {
        Err(InspectionError::unexpected(format!(
            "Unsupported encoding {} for subject attribute {oid}",
            value.tag()
        )))
    }
}
