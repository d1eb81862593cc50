pub mod planetsim_vis2d;
