#[cfg(test)]
mod barcode_proptests {
    use prop::string::string_regex;
    use proptest::prelude::*;

    use code128b::*;

    pub fn code_strategy() -> BoxedStrategy<String> {
        string_regex(r"[ -~]{0,64}").unwrap().boxed()
    }

    proptest! {
        #[test]
        fn proptest_symbol_len(code in code_strategy()) {
            let symbol = encode(&code).unwrap();
            prop_assert_eq!(symbol.len(), code.len() + 3);
            prop_assert_eq!(symbol.indices()[0], START_B);
            prop_assert_eq!(*symbol.indices().last().unwrap(), STOP);
        }

        #[test]
        fn proptest_checksum(code in code_strategy()) {
            let sum: usize = code.bytes().enumerate().map(|(i, b)| (b as usize - 32) * (i + 1)).sum();
            let symbol = encode(&code).unwrap();
            prop_assert_eq!(symbol.checksum(), (103 + sum) % 103);
        }

        #[test]
        fn proptest_encode_idempotent(code in code_strategy()) {
            prop_assert_eq!(encode(&code).unwrap(), encode(&code).unwrap());
        }

        #[test]
        fn proptest_width_monotonic(n in 0usize..500, density in 1u32..8) {
            let a = Dimensions::compute(n, density).unwrap();
            let b = Dimensions::compute(n + 1, density).unwrap();
            prop_assert!(a.width() < b.width());
            prop_assert!(a.height() <= b.height());
        }

        #[test]
        fn proptest_rejects_non_printable(prefix in "[ -~]{0,8}", c in any::<char>()) {
            prop_assume!(!(' '..='~').contains(&c));
            let code = format!("{prefix}{c}");
            let pos = prefix.len();
            prop_assert_eq!(encode(&code), Err(BarcodeError::InvalidCharacter(c, pos)));
        }
    }
}

#[cfg(test)]
mod barcode_tests {
    use test_case::test_case;

    use code128b::{encode, generate, lookup, Code128Builder, Dimensions, DrawingSurface};

    /// Counts drawn lines.
    struct CountingSurface {
        lines: usize,
    }

    impl DrawingSurface for CountingSurface {
        type Color = bool;

        fn create(_width: u32, _height: u32) -> Self {
            Self { lines: 0 }
        }

        fn fill(&mut self, _color: bool) {}

        fn set_stroke_thickness(&mut self, _thickness: u32) {}

        fn allocate_color(&mut self, r: u8, g: u8, b: u8) -> bool {
            r == 0 && g == 0 && b == 0
        }

        fn draw_vertical_line(&mut self, _x: u32, _y0: u32, _y1: u32, color: bool) {
            assert!(color, "Only black lines are expected");
            self.lines += 1;
        }
    }

    #[test_case(' ', 0)]
    #[test_case('~', 94)]
    fn test_boundary_chars(c: char, v: usize) {
        let symbol = encode(&c.to_string()).unwrap();
        assert_eq!(symbol.data(), &[v]);
    }

    #[test_case('\u{1f}')]
    #[test_case('\u{7f}')]
    fn test_boundary_invalid(c: char) {
        assert!(encode(&c.to_string()).is_err());
    }

    #[test]
    fn test_empty_code() {
        let img = generate("", 1).unwrap();
        assert_eq!(img.dimensions(), (35, 50));
        assert_eq!(encode("").unwrap().indices(), &[103, 0, 106]);
    }

    #[test_case("TEST123".to_string(), 2; "test_generate_1")]
    #[test_case("Hello, World!".to_string(), 1; "test_generate_2")]
    #[test_case("~ !\"#$%&'()*+,-./0123456789:;<=>?@".to_string(), 3; "test_generate_3")]
    #[test_case("abcdefghijklmnopqrstuvwxyz{|}".repeat(4).to_string(), 2; "test_generate_4")]
    fn test_generate(code: String, density: u32) {
        let barcode = Code128Builder::new(&code).density(density).build().unwrap();

        // Dimensions
        let img = generate(&code, density).unwrap();
        let dims = Dimensions::compute(code.len(), density).unwrap();
        assert_eq!(img.dimensions(), (dims.width(), dims.height()));
        assert_eq!(dims.width() as usize, (11 * code.len() + 35) * density as usize);

        // Checksum
        let sum: usize = code.bytes().enumerate().map(|(i, b)| (b as usize - 32) * (i + 1)).sum();
        assert_eq!(barcode.checksum(), (103 + sum) % 103);

        // Bar count
        let expected: usize = barcode
            .symbol()
            .indices()
            .iter()
            .map(|&i| lookup(i).unwrap().bars().map(usize::from).sum::<usize>())
            .sum();
        let mut surface = CountingSurface::create(dims.width(), dims.height());
        barcode.render_on(&mut surface).unwrap();
        assert_eq!(surface.lines, expected);
        assert_eq!(barcode.bar_count().unwrap(), expected);
    }

    #[test]
    fn test_generate_leftmost_bar() {
        let img = generate("TEST123", 2).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(0, img.height() - 1).0, [0, 0, 0]);
    }
}
