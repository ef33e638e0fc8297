pub const CALCULATORS_ENG_HELPER: &str = "
                                General notes \n
All values are plain numbers, no unit conversion is done. Fractions (xF, xD, xB, X) must lie in [0, 1]. \n
Press Enter at any prompt to take the default value shown in brackets. \n

                                McCabe-Thiele diagram \n
alpha: relative volatility of the light component, default 2.0 \n
xF: feed mole fraction, default 0.4 \n
xD: distillate mole fraction, default 0.95 \n
xB: bottoms mole fraction, default 0.05 \n
R: reflux ratio, default 1.5 \n
q: feed condition, q = 1 for saturated liquid, q = 0 for saturated vapor, default 1.0 \n
The diagram shows the equilibrium curve y = alpha*x/(1 + (alpha - 1)*x), the rectifying line \n
y = R/(R+1)*x + xD/(R+1), the stripping line y = q/(q-1)*(x - xB) + xB and the diagonal y = x. \n
With q = 1 the stripping line is vertical (infinite slope) and is not drawn; R = -1 makes the \n
rectifying line undefined. Such values are accepted and reported as notes. \n

                                CSTR and PFR sizing \n
F0: feed rate, mol/s, default 1.0 \n
k: first order rate constant, 1/s, default 0.1 \n
X: target conversion, default 0.5 \n
V_CSTR = F0/(k*(1 - X)), V_PFR = F0/k*ln(1/(1 - X)). \n
The PFR profile X = 1 - exp(-k*x/F0) is drawn over a length equal to V_PFR, the CSTR profile \n
X = 1 - exp(-k*F0*V) over volumes from 0 to 5 m3. \n

                                Task files \n
A task file is a JSON document with optional fields output_dir, plot_format (svg or png), \n
plot_width, plot_height, log_level and the sections distillation and reactor holding \n
parameter values by name. Generate a template from the main menu and edit it. \n
";
