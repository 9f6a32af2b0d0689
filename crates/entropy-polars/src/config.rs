//! Configuration types for column entropy

/// Bucket count used when discretization is requested without one
pub const DEFAULT_BUCKETS: usize = 5;

/// How column values are turned into categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Discretization {
    /// Every distinct value is its own category
    #[default]
    Categorical,

    /// Numeric values are grouped into equal-width buckets over `[min, max]`
    EqualWidth { n_buckets: usize },
}

/// Treatment of null cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// Nulls are dropped before counting
    #[default]
    Skip,

    /// All nulls together form one extra category
    AsCategory,
}

/// Options for [`ColumnEntropyExt`](crate::ColumnEntropyExt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntropyConfig {
    pub discretization: Discretization,
    pub nulls: NullPolicy,
}

impl EntropyConfig {
    /// Plain categorical entropy
    pub fn categorical() -> Self {
        Self::default()
    }

    /// Equal-width discretization into `n_buckets` buckets
    pub fn bucketized(n_buckets: usize) -> Self {
        Self {
            discretization: Discretization::EqualWidth { n_buckets },
            ..Self::default()
        }
    }

    /// Build from a bucketize flag and bucket count
    pub fn from_flags(bucketize: bool, n_buckets: usize) -> Self {
        if bucketize {
            Self::bucketized(n_buckets)
        } else {
            Self::categorical()
        }
    }

    pub fn with_nulls(mut self, nulls: NullPolicy) -> Self {
        self.nulls = nulls;
        self
    }

    /// Short label used in result column names and logs
    pub fn name(&self) -> String {
        match self.discretization {
            Discretization::Categorical => "categorical".to_string(),
            Discretization::EqualWidth { n_buckets } => format!("equal_width_{n_buckets}"),
        }
    }
}
