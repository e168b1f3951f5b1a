use matrix_calc::{MatrixService, OperationDispatcher, OperationKind};

#[test]
fn test_add_two_by_two() {
    let dispatcher = OperationDispatcher::default();
    let result = dispatcher.add(2, 2, "1 2 3 4", 2, 2, "5 6 7 8");
    assert_eq!(result, "6 8\n10 12");
}

#[test]
fn test_multiply_by_identity() {
    let dispatcher = OperationDispatcher::default();
    let result = dispatcher.multiply(2, 2, "1 2 3 4", 2, 2, "1 0 0 1");
    assert_eq!(result, "1 2\n3 4");
}

#[test]
fn test_add_mismatched_shapes() {
    let dispatcher = OperationDispatcher::default();
    let result = dispatcher.add(2, 2, "1 2 3 4", 2, 3, "1 2 3 4 5 6");
    assert!(result.starts_with("Error: "));
    assert!(result.contains("same dimensions"));
}

#[test]
fn test_subtract_mismatched_shapes() {
    let dispatcher = OperationDispatcher::default();
    let result = dispatcher.subtract(1, 2, "1 2", 2, 1, "1 2");
    assert_eq!(
        result,
        "Error: Matrices must have the same dimensions for subtraction"
    );
}

#[test]
fn test_divide_non_square_divisor() {
    let dispatcher = OperationDispatcher::default();
    let result = dispatcher.divide(2, 2, "1 2 3 4", 2, 3, "1 2 3 4 5 6");
    assert!(result.starts_with("Error: "));
    assert!(result.contains("square"));
}

#[test]
fn test_multiply_inner_dimension_mismatch() {
    let dispatcher = OperationDispatcher::default();
    let result = dispatcher.multiply(2, 3, "1 2 3 4 5 6", 2, 3, "1 2 3 4 5 6");
    assert_eq!(
        result,
        "Error: Number of columns in first matrix must equal number of rows in second matrix"
    );
}

#[test]
fn test_multiply_rectangular() {
    let dispatcher = OperationDispatcher::default();
    let result = dispatcher.multiply(2, 3, "1 2 3\n4 5 6", 3, 2, "7 8\n9 10\n11 12");
    assert_eq!(result, "58 64\n139 154");
}

#[test]
fn test_divide_fractional_result() {
    let dispatcher = OperationDispatcher::default();
    // [[4,7],[2,6]]^-1 = [[0.6,-0.7],[-0.2,0.4]]
    let result = dispatcher.divide(1, 2, "1 1", 2, 2, "4 7 2 6");
    assert_eq!(result, "0.4 -0.3");
}

#[test]
fn test_divide_singular_divisor() {
    let dispatcher = OperationDispatcher::default();
    let result = dispatcher.divide(2, 2, "1 2 3 4", 2, 2, "1 2 2 4");
    assert_eq!(result, "Error: Second matrix is singular and cannot be inverted");
}

#[test]
fn test_parse_failures_are_reported_as_text() {
    let dispatcher = OperationDispatcher::default();

    let bad_token = dispatcher.add(1, 2, "1 abc", 1, 2, "1 2");
    assert_eq!(bad_token, "Error: Invalid number 'abc' at position 1");

    let short = dispatcher.add(2, 2, "1 2 3", 2, 2, "1 2 3 4");
    assert_eq!(short, "Error: Expected 4 values for a 2x2 matrix but found 3");
}

#[test]
fn test_extra_tokens_are_ignored() {
    let dispatcher = OperationDispatcher::default();
    let result = dispatcher.add(1, 2, "1 2 3 4", 1, 2, "10 20 junk");
    assert_eq!(result, "11 22");
}

#[test]
fn test_dispatch_matches_service_methods() {
    let dispatcher = OperationDispatcher::default();
    let via_dispatch =
        dispatcher.dispatch(OperationKind::Subtract, 2, 2, "5 5 5 5", 2, 2, "1 2 3 4");
    let via_service = dispatcher.subtract(2, 2, "5 5 5 5", 2, 2, "1 2 3 4");
    assert_eq!(via_dispatch, via_service);
    assert_eq!(via_dispatch, "4 3\n2 1");
}

#[test]
fn test_service_is_usable_as_trait_object() {
    let service: Box<dyn MatrixService> = Box::new(OperationDispatcher::default());
    assert_eq!(service.add(1, 1, "0.1", 1, 1, "0.2"), "0.3");
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_huge_dimensions_with_short_text_return_error_text() {
    let dispatcher = OperationDispatcher::default();
    let max = i32::MAX;

    let sum = dispatcher.add(max, max, "1 2", max, max, "1 2");
    assert!(sum.starts_with("Error: Expected "), "{sum}");

    let product = dispatcher.multiply(100_000, 100_000, "1", 100_000, 1, "1");
    assert_eq!(
        product,
        "Error: Expected 10000000000 values for a 100000x100000 matrix but found 1"
    );
}
