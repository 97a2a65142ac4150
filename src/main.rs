use rand::Rng;
use skipset::SkipList;

fn main() {
    let mut list = SkipList::new();
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        list.insert(rng.gen_range(1..=1000));
    }
    println!("{}", list);
    println!(
        "{} distinct values, {} insertions, {} levels",
        list.len(),
        list.total_len(),
        list.height()
    );
}
