use crate::configuration::{PriceLimits, RejectPolicy, Settings};
use crate::data_models::{StockAlert, Verdict};
use crate::notifier::Notifier;
use crate::parser::ProductSource;
use tracing::{error, info, warn};

/// Tally of one pass over the watched items.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct RunReport {
    pub fetched: usize,
    pub failed: usize,
    pub rejected: usize,
    pub not_in_stock: usize,
    pub notified: usize,
    pub aborted: bool,
}

pub struct Watcher<'a, S, N> {
    items: &'a [String],
    limits: PriceLimits,
    on_reject: RejectPolicy,
    source: S,
    notifier: N,
}

impl<'a, S: ProductSource, N: Notifier> Watcher<'a, S, N> {
    pub fn new(settings: &'a Settings, source: S, notifier: N) -> Self {
        Self {
            items: &settings.items,
            limits: settings.limits.price,
            on_reject: settings.on_reject,
            source,
            notifier,
        }
    }

    pub fn run(&self) -> RunReport {
        info!(items = self.items.len(), "starting inventory search");
        let mut report = RunReport::default();
        for item in self.items {
            let url = self.source.product_url(item);
            report.fetched += 1;
            let snapshot = match self.source.fetch(item) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    warn!(%item, %url, "failed to fetch product: {err}");
                    report.failed += 1;
                    continue;
                }
            };

            let verdict = snapshot.evaluate(&self.limits);
            match verdict {
                Verdict::NotFound => {
                    warn!(%item, %url, "request error, does the product exist?");
                }
                Verdict::OutOfBudget => {
                    warn!(
                        %item,
                        %url,
                        price = %snapshot.formatted_price(),
                        stock = snapshot.stock_count,
                        "price does not meet the limits"
                    );
                }
                Verdict::Available => {
                    info!(%item, %url, limit = snapshot.purchase_limit, "[IN STOCK]");
                    let alert = StockAlert::new(&snapshot, url.as_str());
                    match self.notifier.notify(&alert) {
                        Ok(()) => report.notified += 1,
                        Err(err) => error!(%item, "failed to send notification: {err}"),
                    }
                }
                Verdict::Unavailable => {
                    info!(%item, %url, "[NOT IN STOCK]");
                    report.not_in_stock += 1;
                }
            }

            if verdict.is_rejection() {
                report.rejected += 1;
                if self.on_reject == RejectPolicy::Abort {
                    warn!(%item, reason = %verdict, "stopping search early");
                    report.aborted = true;
                    break;
                }
            }
        }
        info!(
            fetched = report.fetched,
            notified = report.notified,
            aborted = report.aborted,
            "search complete"
        );
        report
    }
}
