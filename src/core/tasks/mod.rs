//! Tasks, daily AI usage records and their persistence seams

pub mod links;
pub mod memory;
pub mod model;
pub mod queries;
pub mod store;

pub use links::{calendar_link, share_link};
pub use memory::MemoryStore;
pub use model::{NewTask, Task, UsageRecord, parse_due_date};
pub use queries::{TaskStats, filter_tasks, has_similar_task, is_overdue, tasks_due_on};
pub use store::{TaskStore, UsageStore};
