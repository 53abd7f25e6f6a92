//! The packages on offer and their prices.

use std::fmt::{self, Display};

/// Package tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// The most exclusive tier.
    Gold,
    /// The middle tier.
    Silver,
    /// The entry tier.
    Bronze,
}

impl Tier {
    /// Returns the tier name.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Tier::Gold => "Gold",
            Tier::Silver => "Silver",
            Tier::Bronze => "Bronze",
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bookable package.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Package {
    /// Tier of the package.
    pub tier: Tier,
    /// Full display name, also used in booking messages.
    pub name: String,
    /// Price per person in Rupiah.
    pub price_idr: u64,
}

impl Package {
    /// Returns the price formatted as Rupiah.
    #[inline]
    pub fn price(&self) -> String {
        format_rupiah(self.price_idr)
    }
}

/// Formats an amount as `Rp 185.000.000`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push_str("Rp ");
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// The list of packages, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    /// Creates a catalog from packages.
    #[inline]
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// Returns all packages.
    #[inline]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Finds a package by tier name or full name, ignoring case.
    pub fn find(&self, query: &str) -> Option<&Package> {
        let query = query.trim();
        self.packages.iter().find(|package| {
            package.name.eq_ignore_ascii_case(query)
                || package.tier.name().eq_ignore_ascii_case(query)
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Package {
                tier: Tier::Gold,
                name: "Gold Royal Haramain".to_owned(),
                price_idr: 185_000_000,
            },
            Package {
                tier: Tier::Silver,
                name: "Silver Serenity Madinah".to_owned(),
                price_idr: 65_500_000,
            },
            Package {
                tier: Tier::Bronze,
                name: "Bronze Heritage Saver".to_owned(),
                price_idr: 42_500_000,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(1_000), "Rp 1.000");
        assert_eq!(format_rupiah(65_500_000), "Rp 65.500.000");
        assert_eq!(format_rupiah(185_000_000), "Rp 185.000.000");
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::default();
        assert_eq!(catalog.find("gold").unwrap().price(), "Rp 185.000.000");
        assert_eq!(
            catalog.find(" silver serenity madinah ").unwrap().tier,
            Tier::Silver
        );
        assert_eq!(catalog.find("BRONZE").unwrap().price(), "Rp 42.500.000");
        assert!(catalog.find("platinum").is_none());
    }
}
