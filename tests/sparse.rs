use featl::{CsrBuilder, CsrMatrix};

#[test]
fn builder_stacks_rows_in_order() {
    let mut b = CsrBuilder::new(4);
    b.push_row(&[0, 2]);
    b.push_row(&[]);
    b.push_row(&[1, 2, 3]);
    let m = b.finish();

    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.nnz(), 5);
    assert_eq!(m.row(0), &[0, 2]);
    assert_eq!(m.row(1), &[] as &[usize]);
    assert_eq!(m.row(2), &[1, 2, 3]);
}

#[test]
fn get_and_dense_agree() {
    let mut b = CsrBuilder::new(3);
    b.push_row(&[1]);
    b.push_row(&[0, 2]);
    let m = b.finish();

    assert!(m.get(0, 1));
    assert!(!m.get(0, 0));
    assert!(m.get(1, 2));
    assert_eq!(m.to_dense(), vec![vec![0, 1, 0], vec![1, 0, 1]]);
}

#[test]
fn empty_matrix_has_no_rows() {
    let m = CsrMatrix::empty(0);
    assert_eq!(m.shape(), (0, 0));
    assert_eq!(m.nnz(), 0);
    assert!(m.to_dense().is_empty());
}
