// Tests for forward propagation: output range, determinism and exact values.

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sigmanet::{sigmoid, Activations, Matrix, NetConfig, Network};

fn small_config(input: usize, hidden: usize, output: usize) -> NetConfig {
    NetConfig {
        input_size: input,
        hidden_size: hidden,
        output_size: output,
        train_size: 1,
        test_size: 1,
        learning_rate: 0.3,
        epochs: 1,
        seed: 7,
    }
}

fn seeded_network(cfg: &NetConfig) -> Network {
    Network::new(cfg, &mut ChaCha8Rng::seed_from_u64(cfg.seed))
}

#[test]
fn test_buffers_have_layer_widths() {
    let cfg = small_config(6, 4, 3);
    let net = seeded_network(&cfg);
    let acts = Activations::for_network(&net);
    assert_eq!(acts.hidden.len(), 4);
    assert_eq!(acts.output.len(), 3);
    assert_eq!(net.hidden.weights.rows, 4);
    assert_eq!(net.hidden.weights.cols, 6);
    assert_eq!(net.output.weights.rows, 3);
    assert_eq!(net.output.weights.cols, 4);
}

#[test]
fn test_outputs_lie_in_open_unit_interval() {
    let cfg = small_config(20, 8, 5);
    let net = seeded_network(&cfg);
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut acts = Activations::for_network(&net);

    for _ in 0..50 {
        let x: Vec<f64> = (0..cfg.input_size).map(|_| rng.gen::<f64>()).collect();
        net.forward(&x, &mut acts);
        for &h in &acts.hidden {
            assert!(h > 0.0 && h < 1.0);
        }
        for &o in &acts.output {
            assert!(o > 0.0 && o < 1.0);
        }
    }
}

#[test]
fn test_forward_is_deterministic_and_overwrites_buffers() {
    let cfg = small_config(10, 6, 4);
    let net = seeded_network(&cfg);
    let x: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();

    let mut first = Activations::for_network(&net);
    net.forward(&x, &mut first);

    let mut second = Activations::for_network(&net);
    second.hidden.iter_mut().for_each(|v| *v = 123.0);
    second.output.iter_mut().for_each(|v| *v = -5.0);
    net.forward(&x, &mut second);

    assert_eq!(first, second);
}

#[test]
fn test_forward_does_not_touch_weights() {
    let cfg = small_config(5, 3, 2);
    let net = seeded_network(&cfg);
    let before = net.clone();
    let mut acts = Activations::for_network(&net);
    net.forward(&[0.2, 0.4, 0.6, 0.8, 1.0], &mut acts);
    assert_eq!(net, before);
}

#[test]
fn test_forward_matches_hand_computation() {
    // Hidden: 2 units over 3 inputs. Output: 2 units over 2 hidden.
    let wh = Matrix::from_flat(2, 3, vec![0.1, -0.2, 0.3, 0.5, 0.5, -1.0]);
    let wo = Matrix::from_flat(2, 2, vec![1.0, -1.0, 0.25, 0.75]);
    let net = Network::from_weights(wh, wo);
    let x = [1.0, 0.5, 0.25];

    let h0 = sigmoid(0.1 * 1.0 - 0.2 * 0.5 + 0.3 * 0.25);
    let h1 = sigmoid(0.5 * 1.0 + 0.5 * 0.5 - 1.0 * 0.25);
    let o0 = sigmoid(1.0 * h0 - 1.0 * h1);
    let o1 = sigmoid(0.25 * h0 + 0.75 * h1);

    let mut acts = Activations::for_network(&net);
    net.forward(&x, &mut acts);

    assert_relative_eq!(acts.hidden[0], h0, epsilon = 1e-12);
    assert_relative_eq!(acts.hidden[1], h1, epsilon = 1e-12);
    assert_relative_eq!(acts.output[0], o0, epsilon = 1e-12);
    assert_relative_eq!(acts.output[1], o1, epsilon = 1e-12);
}

#[test]
fn test_zero_input_gives_half_hidden_activations() {
    let cfg = small_config(4, 3, 2);
    let net = seeded_network(&cfg);
    let mut acts = Activations::for_network(&net);
    net.forward(&[0.0; 4], &mut acts);

    for &h in &acts.hidden {
        assert_eq!(h, 0.5);
    }
    for k in 0..2 {
        let z: f64 = net.output.weights.row(k).iter().map(|w| 0.5 * w).sum();
        assert_relative_eq!(acts.output[k], sigmoid(z), epsilon = 1e-12);
    }
}

#[test]
fn test_same_seed_gives_same_weights() {
    let cfg = small_config(8, 4, 3);
    assert_eq!(seeded_network(&cfg), seeded_network(&cfg));

    let other = NetConfig { seed: 8, ..cfg.clone() };
    assert_ne!(seeded_network(&cfg), seeded_network(&other));
}

#[test]
fn test_initial_weights_within_unit_bounds() {
    let cfg = small_config(30, 10, 4);
    let net = seeded_network(&cfg);
    let all = net.hidden.weights.as_slice().iter().chain(net.output.weights.as_slice());
    for &w in all {
        assert!((-1.0..=1.0).contains(&w));
    }
}
