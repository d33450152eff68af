pub mod bucket_sort;
pub mod comb_sort;
pub mod common;
pub mod counting_sort;
pub mod gaps;
pub mod heap_sort;
pub mod pigeonhole_sort;
pub mod radix_sort;
pub mod run_sort;
pub mod shell_sort;
