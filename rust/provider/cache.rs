// SPDX-License-Identifier: LicenseRef-Rateslib-Dual
//
// Copyright (c) 2026 Siffrorna Technology Limited
// This code cannot be used or copied externally
//
// Dual-licensed: Free Educational Licence or Paid Commercial Licence (commercial/professional use)
// Source-available, not open source.
//
// See LICENSE and https://rateslib.com/py/en/latest/i_licence.html for details,
// and/or contact info (at) rateslib (dot) com
////////////////////////////////////////////////////////////////////////////////////////////////////

use log::debug;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::calendar::{CountryCode, HolidaySet, Year};
use crate::error::Result;
use crate::provider::HolidayProvider;

/// Memoises the sets returned by an inner provider for the lifetime of the run.
///
/// Failures are not cached, so a later call retries the inner provider.
pub struct CachedProvider<P> {
    inner: P,
    cache: RwLock<HashMap<(Year, CountryCode), HolidaySet>>,
}

impl<P: HolidayProvider> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        CachedProvider {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: HolidayProvider> HolidayProvider for CachedProvider<P> {
    fn fetch(&self, year: Year, country: &CountryCode) -> Result<HolidaySet> {
        let key = (year, *country);
        {
            let r = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(set) = r.get(&key) {
                debug!("cache hit for '{}' ({})", country, year);
                return Ok(set.clone());
            }
        }
        let set = self.inner.fetch(year, country)?;
        let mut w = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        w.insert(key, set.clone());
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        inner: StaticProvider,
        calls: AtomicUsize,
    }

    impl HolidayProvider for CountingProvider {
        fn fetch(&self, year: Year, country: &CountryCode) -> Result<HolidaySet> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch(year, country)
        }
    }

    fn fixture() -> CachedProvider<CountingProvider> {
        CachedProvider::new(CountingProvider {
            inner: StaticProvider::new().with("us", HolidaySet::new(vec!["07-04".parse().unwrap()])),
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn test_fetches_once_per_country() {
        let cached = fixture();
        let year = Year::try_new(2024).unwrap();
        let a = cached.fetch(year, &CountryCode::new("us")).unwrap();
        let b = cached.fetch(year, &CountryCode::new("us")).unwrap();
        assert_eq!(a, b);
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cached = fixture();
        let year = Year::try_new(2024).unwrap();
        assert!(cached.fetch(year, &CountryCode::new("ca")).is_err());
        assert!(cached.fetch(year, &CountryCode::new("ca")).is_err());
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
        assert!(cached.is_empty());
    }
}
