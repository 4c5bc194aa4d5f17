//! Address validation for configuration values
//!
//! Interface addresses and DNS servers accept a plain IPv4/IPv6 address or
//! `addr/prefix` notation. MAC addresses must be six colon separated octets.

use std::net::IpAddr;

use crate::error::ValidationError;

type ValidationResult = std::result::Result<(), ValidationError>;

/// Validate an IP address with optional CIDR prefix
///
/// # Arguments
/// * `value` - Address such as `192.168.1.1` or `192.168.1.1/24`
///
/// # Returns
/// * `Ok(())` if valid, the reason otherwise
pub fn validate_ip_address(value: &str) -> ValidationResult {
    match value.split_once('/') {
        Some((addr, prefix)) => {
            if parse_cidr(addr, prefix).is_some() {
                Ok(())
            } else {
                Err(ValidationError::InvalidCidr(value.to_string()))
            }
        }
        None => value
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidIp(value.to_string())),
    }
}

/// Validate a DNS server address
pub fn validate_dns_address(value: &str) -> ValidationResult {
    validate_ip_address(value)
}

/// Validate a colon separated MAC address (`XX:XX:XX:XX:XX:XX`)
pub fn validate_mac_address(value: &str) -> ValidationResult {
    if is_valid_mac(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMac(value.to_string()))
    }
}

/// Whether `value` is an IP address or CIDR block
pub fn is_valid_ip_or_cidr(value: &str) -> bool {
    validate_ip_address(value).is_ok()
}

/// Whether `value` is a colon separated MAC address
pub fn is_valid_mac(value: &str) -> bool {
    let octets: Vec<&str> = value.split(':').collect();
    octets.len() == 6
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit()))
}

fn parse_cidr(addr: &str, prefix: &str) -> Option<(IpAddr, u8)> {
    let ip: IpAddr = addr.parse().ok()?;
    // Reject signs and empty prefixes that u8 parsing would accept or mangle
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let len: u8 = prefix.parse().ok()?;
    let max = match ip {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    (len <= max).then_some((ip, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_addresses() {
        assert!(validate_ip_address("192.168.1.1").is_ok());
        assert!(validate_ip_address("2001:db8::1").is_ok());
        assert!(validate_ip_address("::1").is_ok());
    }

    #[test]
    fn test_cidr_addresses() {
        assert!(validate_ip_address("192.168.1.1/24").is_ok());
        assert!(validate_ip_address("10.0.0.0/0").is_ok());
        assert!(validate_ip_address("10.0.0.1/32").is_ok());
        assert!(validate_ip_address("2001:db8::/64").is_ok());
        assert!(validate_ip_address("2001:db8::1/128").is_ok());
    }

    #[test]
    fn test_invalid_cidr() {
        for value in [
            "192.168.1.1/33",
            "2001:db8::1/129",
            "192.168.1.1/",
            "192.168.1.1/+8",
            "192.168.1/24",
            "192.168.1.1/24/8",
        ] {
            let err = validate_ip_address(value).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidCidr(_)),
                "{value} should be an invalid CIDR"
            );
        }
    }

    #[test]
    fn test_invalid_ip() {
        for value in ["", "256.1.1.1", "1.2.3", "example.com", "8.8.8.8 "] {
            let err = validate_ip_address(value).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidIp(_)), "{value:?}");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            validate_dns_address("nope").unwrap_err().to_string(),
            "invalid IP address format: nope"
        );
        assert_eq!(
            validate_ip_address("1.1.1.1/40").unwrap_err().to_string(),
            "invalid CIDR notation: 1.1.1.1/40"
        );
    }

    #[test]
    fn test_mac_addresses() {
        assert!(validate_mac_address("00:11:22:33:44:55").is_ok());
        assert!(validate_mac_address("aa:BB:cc:DD:ee:FF").is_ok());

        for value in [
            "00:11:22:33:44",
            "00:11:22:33:44:55:66",
            "00-11-22-33-44-55",
            "001:11:22:33:44:55",
            "0g:11:22:33:44:55",
            "",
        ] {
            assert!(validate_mac_address(value).is_err(), "{value:?}");
        }
    }

    #[test]
    fn test_predicates() {
        assert!(is_valid_ip_or_cidr("8.8.8.8"));
        assert!(!is_valid_ip_or_cidr("8.8.8"));
        assert!(is_valid_mac("de:ad:be:ef:00:01"));
        assert!(!is_valid_mac("de:ad:be:ef:00"));
    }
}
