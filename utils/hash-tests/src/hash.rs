/// A known answer test vector, loaded from the data directory of the
/// crate under test.
pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

#[macro_export]
macro_rules! new_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            Test {
                name: $name,
                input: include_bytes!(concat!("data/", $name, ".input")),
                output: include_bytes!(concat!("data/", $name, ".output")),
            },
        )*]
    };
}

pub fn main_test(hash: fn(&[u8]) -> [u8; 32], tests: &[Test]) {
    for t in tests.iter() {
        let out = hash(t.input);
        assert_eq!(out[..], t.output[..], "{}", t.name);
    }
}

pub fn one_million_a(hash: fn(&[u8]) -> [u8; 32], expected: &[u8]) {
    let input = vec![b'a'; 1_000_000];
    let out = hash(&input);
    assert_eq!(out[..], expected[..]);
}
