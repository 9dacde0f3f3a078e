mod test_cut;

#[test]
fn test_assert_delta() {
    assert_delta!(1.0f32, 1.05, 0.1);
    assert_delta!(-2.0f64, -2.0, 0.0);
}

#[test]
#[should_panic]
fn test_assert_delta_fails() {
    assert_delta!(1.0f32, 2.0, 0.5);
}
