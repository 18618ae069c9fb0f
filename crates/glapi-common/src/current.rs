// current.rs — Per-thread current dispatch table
//
// For callers that do not hold a table: they dispatch through whichever
// table the calling thread made current (`Dispatch::call_current`).

use std::cell::RefCell;
use std::sync::Arc;

use crate::table::Table;

thread_local! {
    static CURRENT: RefCell<Option<Arc<Table>>> = const { RefCell::new(None) };
}

/// Make `table` current on this thread, returning the previous one.
pub fn make_current(table: Option<Arc<Table>>) -> Option<Arc<Table>> {
    CURRENT.with(|c| c.replace(table))
}

pub fn current() -> Option<Arc<Table>> {
    CURRENT.with(|c| c.borrow().clone())
}

/// Run `f` with this thread's current table. `f` may itself change the
/// current table.
pub fn with_current<R>(f: impl FnOnce(Option<&Table>) -> R) -> R {
    let table = current();
    f(table.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::Offset;

    unsafe extern "C" fn noop() {}

    #[test]
    fn test_no_table_by_default() {
        std::thread::spawn(|| {
            assert!(current().is_none());
            assert!(with_current(|t| t.is_none()));
        })
        .join()
        .expect("thread");
    }

    #[test]
    fn test_make_current_is_per_thread() {
        let mut t = Table::with_size(4);
        t.set(Offset::from_slot(1), noop);
        let t = Arc::new(t);

        let prev = make_current(Some(t.clone()));
        assert!(prev.is_none());
        assert_eq!(with_current(|t| t.map(|t| t.installed_count())), Some(1));

        std::thread::spawn(|| assert!(current().is_none(), "other threads see no table"))
            .join()
            .expect("thread");

        let prev = make_current(None);
        assert!(prev.is_some_and(|p| Arc::ptr_eq(&p, &t)));
        assert!(current().is_none());
    }

    #[test]
    fn test_with_current_may_switch_tables() {
        make_current(Some(Arc::new(Table::with_size(2))));
        let len = with_current(|t| {
            make_current(None);
            t.map(Table::len)
        });
        assert_eq!(len, Some(2));
        assert!(current().is_none());
    }
}
