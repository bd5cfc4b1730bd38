use crate::{
    clock::{Clock, SystemClock},
    entropy::{EntropySource, OsEntropy},
    error::Error,
};
use lexid_core::{Error as IdError, LexId};
use typed_builder::TypedBuilder;

/// Configures a lexid generator instance.
///
/// Replaces the usual process-wide default-generator singleton: callers hold
/// an explicit value and pass it to [`Generator::new`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct GeneratorSettings {
    /// Public-domain scope used when `next_id` is called without an explicit
    /// scope. 0 is the "maximum scope" alias and stores as 65535.
    #[builder(default = 0)]
    pub default_scope: u16,
}

/// Stateless identifier generator.
///
/// Every call reads a fresh timestamp and fresh entropy; there is no
/// sequence counter and no lock. Uniqueness rests on the 64 entropy bits
/// alone, so same-millisecond collisions are a probabilistic risk the design
/// accepts rather than coordinates away.
pub struct Generator<C: Clock, E: EntropySource> {
    default_scope: u16,
    clock: C,
    entropy: E,
}

impl Generator<SystemClock, OsEntropy> {
    /// Creates a generator backed by the system clock and the OS CSPRNG.
    pub fn new(settings: GeneratorSettings) -> Self {
        Self::with_parts(settings, SystemClock, OsEntropy)
    }
}

impl<C: Clock, E: EntropySource> Generator<C, E> {
    /// Creates a generator with an injected clock and entropy source.
    pub fn with_parts(settings: GeneratorSettings, clock: C, entropy: E) -> Self {
        Self {
            default_scope: settings.default_scope,
            clock,
            entropy,
        }
    }

    /// Generates an identifier with the configured default scope.
    pub fn next_id(&self) -> Result<LexId, Error> {
        self.next_id_with_scope(self.default_scope)
    }

    /// Generates an identifier with an explicit public-domain scope.
    pub fn next_id_with_scope(&self, scope: u16) -> Result<LexId, Error> {
        let now = self.clock.now();
        let millis = u64::try_from(now.as_millisecond()).map_err(|_| IdError::Range {
            detail: format!("clock reads {} ms, before the Unix epoch", now.as_millisecond()),
        })?;
        let entropy = self.entropy.entropy()?;
        Ok(LexId::from_parts(millis, scope, entropy)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_clock::TestClock;
    use crate::entropy::test_entropy::{FailingEntropy, FixedEntropy};
    use jiff::Timestamp;

    const GOLDEN_MS: i64 = 1_469_918_176_385;
    const GOLDEN_ENTROPY: [u8; 8] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];

    fn make_generator(default_scope: u16) -> Generator<TestClock, FixedEntropy> {
        let settings = GeneratorSettings::builder()
            .default_scope(default_scope)
            .build();
        let clock = TestClock::new(Timestamp::from_millisecond(GOLDEN_MS).unwrap());
        Generator::with_parts(settings, clock, FixedEntropy(GOLDEN_ENTROPY))
    }

    #[test]
    fn produces_the_golden_identifier() {
        let gen = make_generator(1000);
        let id = gen.next_id().unwrap();
        assert_eq!(id.to_base32(), "01ARYZ6S410FM000820C20A1G7");
        assert_eq!(id.to_uuid(), "01563df3-6481-03e8-0001-020304050607");
    }

    #[test]
    fn default_scope_zero_stores_the_maximum() {
        let gen = make_generator(0);
        let id = gen.next_id().unwrap();
        assert_eq!(id.scope(), 65535);
    }

    #[test]
    fn explicit_scope_overrides_the_default() {
        let gen = make_generator(7);
        let id = gen.next_id_with_scope(42).unwrap();
        assert_eq!(id.scope(), 42);
        assert_eq!(gen.next_id().unwrap().scope(), 7);
    }

    #[test]
    fn timestamp_tracks_the_clock() {
        let settings = GeneratorSettings::builder().build();
        let clock = TestClock::new(Timestamp::from_millisecond(GOLDEN_MS).unwrap());
        let gen = Generator::with_parts(settings, clock.clone(), FixedEntropy(GOLDEN_ENTROPY));

        assert_eq!(gen.next_id().unwrap().timestamp_millis(), GOLDEN_MS as u64);

        clock.set(Timestamp::from_millisecond(GOLDEN_MS + 125).unwrap());
        assert_eq!(
            gen.next_id().unwrap().timestamp_millis(),
            GOLDEN_MS as u64 + 125
        );
    }

    #[test]
    fn entropy_failure_is_propagated() {
        let settings = GeneratorSettings::builder().build();
        let clock = TestClock::new(Timestamp::from_millisecond(GOLDEN_MS).unwrap());
        let gen = Generator::with_parts(settings, clock, FailingEntropy);
        assert!(matches!(gen.next_id(), Err(Error::Entropy { .. })));
    }

    #[test]
    fn pre_epoch_clock_is_a_range_error() {
        let settings = GeneratorSettings::builder().build();
        let clock = TestClock::new(Timestamp::from_millisecond(-1).unwrap());
        let gen = Generator::with_parts(settings, clock, FixedEntropy(GOLDEN_ENTROPY));
        assert!(matches!(
            gen.next_id(),
            Err(Error::Id(IdError::Range { .. }))
        ));
    }

    #[test]
    fn system_generator_produces_distinct_ids() {
        let gen = Generator::new(GeneratorSettings::builder().default_scope(1).build());
        let first = gen.next_id().unwrap();
        let second = gen.next_id().unwrap();
        // Fresh entropy per call is the uniqueness guarantee.
        assert_ne!(first, second);
        assert_eq!(LexId::from_base32(&first.to_base32()).unwrap(), first);
    }
}
