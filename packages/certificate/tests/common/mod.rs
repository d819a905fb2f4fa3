//! Shared fixtures: company certificates generated at test time

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::PKey;
use openssl::x509::X509;
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};

pub const PASSWORD: &str = "senha-do-certificado";

pub const COMPANY_CN: &str = "ACME INDUSTRIA LTDA:12345678000199";
pub const COMPANY_L: &str = "Sao Paulo";
pub const COMPANY_O: &str = "ICP-Brasil";
pub const COMPANY_OU: &str = "Certificado PJ A1";

/// CN, L, O, OU as the inspector renders them
pub fn company_information() -> String {
    format!("{COMPANY_CN}\n{COMPANY_L}\n{COMPANY_O}\n{COMPANY_OU}")
}

pub fn company_subject() -> DistinguishedName {
    let mut distinguished_name = DistinguishedName::new();
    distinguished_name.push(DnType::CountryName, "BR");
    distinguished_name.push(DnType::OrganizationName, COMPANY_O);
    distinguished_name.push(DnType::OrganizationalUnitName, COMPANY_OU);
    distinguished_name.push(DnType::LocalityName, COMPANY_L);
    distinguished_name.push(DnType::CommonName, COMPANY_CN);
    distinguished_name
}

/// Self-signed certificate expiring at midnight UTC on the given day.
/// Returns (certificate DER, PKCS#8 key DER).
pub fn certificate_expiring(
    year: i32,
    month: u8,
    day: u8,
    subject: DistinguishedName,
) -> (Vec<u8>, Vec<u8>) {
    let mut params =
        CertificateParams::new(Vec::<String>::new()).expect("Failed to create certificate parameters");
    params.distinguished_name = subject;
    params.not_before = rcgen::date_time_ymd(2020, 1, 1);
    params.not_after = rcgen::date_time_ymd(year, month, day);

    let key_pair = KeyPair::generate().expect("Failed to generate key pair");
    let cert = params
        .self_signed(&key_pair)
        .expect("Failed to create self-signed certificate");

    (cert.der().to_vec(), key_pair.serialize_der())
}

/// Bundle certificate and key into a password-protected PKCS#12 container
pub fn pkcs12_der(cert_der: &[u8], key_der: &[u8], password: &str) -> Vec<u8> {
    let cert = X509::from_der(cert_der).expect("Failed to load certificate");
    let pkey = PKey::private_key_from_pkcs8(key_der).expect("Failed to load private key");
    Pkcs12::builder()
        .name("fiscalcert")
        .pkey(&pkey)
        .cert(&cert)
        .build2(password)
        .expect("Failed to build PKCS#12")
        .to_der()
        .expect("Failed to encode PKCS#12")
}

/// PKCS#12 as older exporters write it: RC2-40 certificate bag, 3DES key
/// bag, SHA-1 MAC. Needs the OpenSSL legacy provider to build.
pub fn legacy_pkcs12_der(cert_der: &[u8], key_der: &[u8], password: &str) -> Vec<u8> {
    let cert = X509::from_der(cert_der).expect("Failed to load certificate");
    let pkey = PKey::private_key_from_pkcs8(key_der).expect("Failed to load private key");
    Pkcs12::builder()
        .name("fiscalcert")
        .pkey(&pkey)
        .cert(&cert)
        .cert_algorithm(Nid::PBE_WITHSHA1AND40BITRC2_CBC)
        .key_algorithm(Nid::PBE_WITHSHA1AND3_KEY_TRIPLEDES_CBC)
        .mac_md(MessageDigest::sha1())
        .build2(password)
        .expect("Failed to build legacy PKCS#12")
        .to_der()
        .expect("Failed to encode PKCS#12")
}

/// Base64 PKCS#12 for a company certificate expiring on the given day
pub fn company_container(year: i32, month: u8, day: u8, password: &str) -> Vec<u8> {
    let (cert_der, key_der) = certificate_expiring(year, month, day, company_subject());
    STANDARD.encode(pkcs12_der(&cert_der, &key_der, password)).into_bytes()
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("valid UTC timestamp")
}
