use std::fmt;

/// GPU resources acquired during setup.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResourceKind {
    Device,
    Surface,
    DepthBuffer,
    EffectModule,
    Pipeline,
    VertexBuffer,
    /// Transform uniform for the target slot at this index.
    TransformBuffer(usize),
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Device => f.write_str("device"),
            ResourceKind::Surface => f.write_str("surface"),
            ResourceKind::DepthBuffer => f.write_str("depth buffer"),
            ResourceKind::EffectModule => f.write_str("effect module"),
            ResourceKind::Pipeline => f.write_str("pipeline"),
            ResourceKind::VertexBuffer => f.write_str("vertex buffer"),
            ResourceKind::TransformBuffer(slot) => write!(f, "transform buffer #{slot}"),
        }
    }
}

/// Bookkeeping for live GPU resources.
///
/// Ownership already guarantees single release; the ledger makes it
/// observable (logs, teardown report) and rejects mismatched releases.
#[derive(Debug, Default)]
pub struct ResourceLedger {
    live: Vec<ResourceKind>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an acquisition. Returns false if `kind` was already live.
    pub fn acquire(&mut self, kind: ResourceKind) -> bool {
        if self.live.contains(&kind) {
            log::warn!("resource {kind} acquired twice");
            return false;
        }
        log::debug!("acquired {kind}");
        self.live.push(kind);
        true
    }

    /// Records a release. Returns false if `kind` was not live.
    pub fn release(&mut self, kind: ResourceKind) -> bool {
        let Some(pos) = self.live.iter().position(|k| *k == kind) else {
            log::warn!("release of {kind} which is not live");
            return false;
        };
        self.live.remove(pos);
        log::debug!("released {kind}");
        true
    }

    #[inline]
    pub fn is_live(&self, kind: ResourceKind) -> bool {
        self.live.contains(&kind)
    }

    /// Live resources in acquisition order.
    #[inline]
    pub fn live(&self) -> &[ResourceKind] {
        &self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Releases everything still live, newest first.
    pub fn drain(&mut self) -> TeardownReport {
        let mut released = Vec::with_capacity(self.live.len());
        while let Some(kind) = self.live.pop() {
            log::debug!("released {kind}");
            released.push(kind);
        }
        TeardownReport { released }
    }
}

/// What a teardown released, in release order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeardownReport {
    pub released: Vec<ResourceKind>,
}

impl TeardownReport {
    /// Number of times `kind` appears in the report.
    pub fn count(&self, kind: ResourceKind) -> usize {
        self.released.iter().filter(|k| **k == kind).count()
    }
}
